pub mod format_time;
pub mod icon;
pub mod queued_content;
pub mod tag_chip;
pub mod user_card;
