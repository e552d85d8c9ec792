use std::panic;
use leptos::logging::log;

/// Chains a hook after the console one that explains owner-disposal panics,
/// which show up when a review response lands after the queue has unmounted.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        if is_owner_disposal(&message) {
            log!("[PANIC] Reactive owner already disposed. Usually one of:");
            log!("[PANIC] 1. A pending-review fetch resolved after the queue widget unmounted");
            log!("[PANIC] 2. An approve/reject response arrived after navigating away");
            log!("[PANIC] 3. The scroll-to-top timer fired after cleanup");
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

fn is_owner_disposal(message: &str) -> bool {
    message.contains("OwnerDisposed") || message.contains("disposed")
}

/// Installs the console panic hook, then ours on top of it.
pub fn init() {
    console_error_panic_hook::set_once();
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_from_payloads() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        let borrowed: Box<dyn std::any::Any + Send> = Box::new("borrowed");
        let other: Box<dyn std::any::Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(owned.as_ref()), "owned");
        assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
        assert_eq!(panic_message(other.as_ref()), "Unknown panic");
    }

    #[test]
    fn test_detects_owner_disposal() {
        assert!(is_owner_disposal("called `Result::unwrap()` on an `Err` value: OwnerDisposed(..)"));
        assert!(!is_owner_disposal("index out of bounds"));
    }
}
