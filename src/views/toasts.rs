use crate::notify::Toast;
use maud::{Markup, html};
use std::time::Duration;

///The toast stack. Each toast asks the host to drop it when whatever is left of `ttl` has passed,
///or when clicked.
pub fn toast_stack(toasts: &[Toast], ttl: Duration) -> Markup {
    html! {
        div id="toasts" class="fixed top-5 right-5 flex flex-col space-y-2 z-50" {
            @for toast in toasts {
                @let remaining_millis = toast.remaining(ttl).as_millis();
                div class={"notification notification-" (toast.level.class_suffix()) " py-4 px-6 rounded shadow-md text-white cursor-pointer"}
                    style={"background: " (toast.level.colour())}
                    hx-delete={"/toasts/" (toast.id)}
                    hx-trigger={"click, load delay:" (remaining_millis) "ms"}
                    hx-target="#toasts"
                    hx-swap="outerHTML" {
                    (toast.message)
                }
            }
        }
    }
}
