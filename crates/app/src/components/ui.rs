use dioxus::prelude::*;

/// Visual tone for badges and stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tone {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Destructive,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Default => "default",
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Destructive => "destructive",
        }
    }
}

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Inline label for statuses and categories.
#[component]
pub fn Badge(#[props(default)] tone: Tone, children: Element) -> Element {
    rsx! {
        span { class: "badge", "data-tone": tone.class(), {children} }
    }
}

/// Dashboard stat tile. `children` is the icon slot.
#[component]
pub fn StatsCard(
    title: String,
    value: String,
    #[props(default)] tone: Tone,
    children: Element,
) -> Element {
    rsx! {
        div { class: "stats-card", "data-tone": tone.class(),
            div { class: "stats-card-icon", {children} }
            div { class: "stats-card-body",
                p { class: "stats-card-title", "{title}" }
                p { class: "stats-card-value", "{value}" }
            }
        }
    }
}

/// Loading placeholder bar.
#[component]
pub fn Skeleton() -> Element {
    rsx! {
        div { class: "skeleton" }
    }
}
