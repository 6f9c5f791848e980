use dioxus::prelude::*;

use crate::t;

#[component]
pub fn DataStory() -> Element {
    // Reactive dependency on the global language code (if provided).
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-story",
            article { class: "story-panel",
                h2 { {t!("story-title")} }
                p { {t!("story-health")} }
                p { {t!("story-devices")} }
                p { {t!("story-scale")} }
            }
            aside { class: "story-panel story-glossary",
                h2 { {t!("glossary-title")} }
                dl {
                    dt { {t!("glossary-kpi-term")} }
                    dd { {t!("glossary-kpi")} }
                    dt { {t!("glossary-aggregate-term")} }
                    dd { {t!("glossary-aggregate")} }
                    dt { {t!("glossary-selection-term")} }
                    dd { {t!("glossary-selection")} }
                }
            }
        }
    }
}
