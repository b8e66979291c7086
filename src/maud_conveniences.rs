use maud::{Markup, Render, html};

const INPUT_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
const LABEL_CLASSES: &str = "block text-sm font-bold mb-2 text-gray-300";

///A table whose body lives at `#{body_id}`, so a loader can rewrite it in one go.
pub fn render_table<const N: usize>(
    body_id: &'static str,
    titles: [&'static str; N],
    body: impl Render,
) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full bg-gray-800 rounded shadow-md" {
                thead class="bg-gray-700" {
                    tr {
                        @for title in titles {
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                        }
                    }
                }
                tbody id=(body_id) {
                    (body)
                }
            }
        }
    }
}

pub fn cell(contents: impl Render) -> Markup {
    html! {
        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(contents)}
    }
}

pub fn placeholder_row(colspan: u8, text: &str) -> Markup {
    html! {
        tr {
            td colspan=(colspan) class="text-center py-4 text-gray-400" {(text)}
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn form_element(id: &str, label: &str, input_type: &str, value: &str) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class=(LABEL_CLASSES) {(label)}
            input required type=(input_type) id=(id) name=(id) value=(value) class=(INPUT_CLASSES) {}
        }
    }
}

pub fn select_element(id: &str, name: &str, label: &str, options: impl Render) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class=(LABEL_CLASSES) {(label)}
            select required id=(id) name=(name) class=(INPUT_CLASSES) {
                (options)
            }
        }
    }
}

///A dropdown with fixed choices, `current` pre-selected.
pub fn fixed_select(id: &str, label: &str, choices: &[&str], current: &str) -> Markup {
    select_element(
        id,
        id,
        label,
        html! {
            option value="" {"Select"}
            @for choice in choices {
                option value=(choice) selected[*choice == current] {(choice)}
            }
        },
    )
}

pub fn form_submit_button(text: &str) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (text)
            }
        }
    }
}

///`kind` ends up as `status-{kind}`, which is what the stylesheet keys the colours on.
pub fn status_badge(kind: &str, text: impl Render) -> Markup {
    html! {
        span class={"status status-" (kind) " px-2 py-1 rounded text-sm"} {(text)}
    }
}
