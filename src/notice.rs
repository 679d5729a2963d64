//! User Notices
//!
//! Short messages shown with a blocking `alert`, like the rest of the site.

use crate::config::Messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AddedToCart,
    AddFailed,
    NetworkError,
    LinkCopied,
    CopyFailed,
}

impl Notice {
    pub fn text<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            Self::AddedToCart => &messages.added,
            Self::AddFailed => &messages.add_failed,
            Self::NetworkError => &messages.network_error,
            Self::LinkCopied => &messages.link_copied,
            Self::CopyFailed => &messages.copy_failed,
        }
    }
}

pub fn show(notice: Notice, messages: &Messages) {
    let Some(window) = web_sys::window() else { return };
    if window.alert_with_message(notice.text(messages)).is_err() {
        log::warn!("[NOTICE] could not show {:?}", notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_notices_are_distinct() {
        let messages = Messages::default();
        assert_ne!(Notice::AddFailed.text(&messages), Notice::NetworkError.text(&messages));
        assert_eq!(Notice::LinkCopied.text(&messages), "Lien copié dans le presse-papier !");
    }
}
