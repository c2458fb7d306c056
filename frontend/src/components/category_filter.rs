use yew::prelude::*;

/// Categories offered by the filter row; the backend accepts free-form
/// strings, `all` is the unfiltered sentinel.
pub const CATEGORIES: &[&str] = &["all", "work", "personal", "health", "other"];

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub active: String,
    pub on_select: Callback<String>,
}

/// Mutually exclusive category buttons; selecting one immediately emits it.
#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    html! {
        <div class="category-filters">
            { for CATEGORIES.iter().map(|category| {
                let active = props.active == *category;
                let value = category.to_string();
                let onclick = {
                    let on_select = props.on_select.clone();
                    let value = value.clone();
                    Callback::from(move |_| on_select.emit(value.clone()))
                };

                html! {
                    <button
                        class={if active { "filter-btn active" } else { "filter-btn" }}
                        aria-pressed={active.to_string()}
                        data-category={value}
                        {onclick}
                    >
                        { label(category) }
                    </button>
                }
            }) }
        </div>
    }
}

fn label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
