use gram_core::model::Portal;

use crate::store::LoginPhase;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginCardVm {
    pub avatar: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub username_placeholder: &'static str,
    pub busy: bool,
    pub leaving: bool,
    pub password_input_type: &'static str,
    pub password_toggle_icon: &'static str,
}

#[must_use]
pub fn login_card_vm(portal: Portal, phase: LoginPhase, password_visible: bool) -> LoginCardVm {
    let copy = portal.copy();
    LoginCardVm {
        avatar: copy.avatar,
        title: copy.card_title,
        subtitle: copy.card_subtitle,
        username_placeholder: copy.username_placeholder,
        busy: phase != LoginPhase::Idle,
        leaving: phase == LoginPhase::Leaving,
        password_input_type: if password_visible { "text" } else { "password" },
        password_toggle_icon: if password_visible { "🙈" } else { "👁️" },
    }
}
