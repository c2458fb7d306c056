use gloo::timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub level: ToastLevel,
}

/// Capability for surfacing transient feedback.
///
/// Handed down through context so service calls can notify without reaching
/// for any global display state.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    show: Callback<ToastMessage>,
}

impl Notifier {
    pub fn new(show: Callback<ToastMessage>) -> Self {
        Notifier { show }
    }

    pub fn info(&self, text: impl Into<String>) {
        self.emit(ToastLevel::Info, text.into());
    }

    pub fn success(&self, text: impl Into<String>) {
        self.emit(ToastLevel::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.emit(ToastLevel::Error, text.into());
    }

    fn emit(&self, level: ToastLevel, text: String) {
        self.show.emit(ToastMessage { text, level });
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Owns the single shared toast slot.
///
/// Each message overwrites whatever is currently visible and schedules its
/// own dismissal; an overwrite does not cancel the previous timer, so a
/// newer message can be hidden by an older one firing.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let current = use_state(|| None::<ToastMessage>);

    let show = {
        let current = current.clone();
        Callback::from(move |message: ToastMessage| {
            current.set(Some(message));
            let current = current.clone();
            Timeout::new(TOAST_DURATION_MS, move || current.set(None)).forget();
        })
    };

    html! {
        <ContextProvider<Notifier> context={Notifier::new(show)}>
            { props.children.clone() }
            {
                if let Some(message) = &*current {
                    html! {
                        <div class={classes!("toast", "show", message.level.as_str())}>
                            { &message.text }
                        </div>
                    }
                } else {
                    html! { <div class="toast"></div> }
                }
            }
        </ContextProvider<Notifier>>
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("ToastProvider is mounted above every page")
}
