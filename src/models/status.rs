/// Moderation status of the flagged object, as shown in the admin badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Normal,
    Closed,
    Deleted,
    Pending,
    Unlisted,
}

impl ListStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(ListStatus::Normal),
            2 => Some(ListStatus::Closed),
            10 => Some(ListStatus::Deleted),
            11 => Some(ListStatus::Pending),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ListStatus::Normal => "admin.questions.normal",
            ListStatus::Closed => "admin.questions.closed",
            ListStatus::Deleted => "admin.questions.deleted",
            ListStatus::Pending => "admin.questions.pending",
            ListStatus::Unlisted => "btns.unlisted",
        }
    }

    /// Bootstrap badge class.
    pub fn variant(self) -> &'static str {
        match self {
            ListStatus::Normal => "text-bg-success",
            ListStatus::Closed => "text-bg-warning",
            ListStatus::Deleted => "text-bg-danger",
            ListStatus::Pending | ListStatus::Unlisted => "text-bg-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowStatus {
    Visible,
    Unlisted,
}

impl ShowStatus {
    pub fn from_code(code: i32) -> Self {
        if code == 2 {
            ShowStatus::Unlisted
        } else {
            ShowStatus::Visible
        }
    }
}
