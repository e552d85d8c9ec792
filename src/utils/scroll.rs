use gloo_timers::callback::Timeout;

/// Delay before scrolling, giving the new item a frame to render.
pub const SCROLL_DELAY_MS: u32 = 150;

pub fn scroll_to_doc_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn schedule_scroll_to_top() {
    Timeout::new(SCROLL_DELAY_MS, scroll_to_doc_top).forget();
}
