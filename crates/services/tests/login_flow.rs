use std::sync::Arc;
use std::time::Duration;

use gram_core::model::{Credentials, LoginDraft, LoginError, Portal};
use gram_core::time::fixed_clock_at;
use services::{
    AppServices, AuthError, AuthGateway, DemoConfig, NavigationState, Profile, SessionError,
    SessionService,
};

fn demo_session() -> Arc<SessionService> {
    AppServices::demo(DemoConfig::default(), fixed_clock_at(14))
        .expect("bundled catalogue")
        .session()
}

#[tokio::test(start_paused = true)]
async fn blank_fields_never_sign_in() {
    let session = demo_session();
    let state = session.initial_state();

    for draft in [
        LoginDraft::new("", "secret"),
        LoginDraft::new("asha", ""),
        LoginDraft::new("   ", "   "),
    ] {
        let started = tokio::time::Instant::now();
        let err = session.sign_in(state.portal(), &draft).await.unwrap_err();
        assert!(err.is_validation(), "{err}");
        // Validation fails before the simulated round trip starts.
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    assert_eq!(
        session
            .sign_in(Portal::Learner, &LoginDraft::new("", "pw"))
            .await,
        Err(SessionError::Login(LoginError::MissingUsername))
    );
    assert!(!state.is_signed_in());
    assert_eq!(state, session.initial_state());
}

#[tokio::test(start_paused = true)]
async fn filled_form_signs_in_after_latency() {
    let session = demo_session();
    let mut state = session.initial_state();
    session.switch_portal(&mut state, Portal::Educator);

    let started = tokio::time::Instant::now();
    let profile = session
        .sign_in(state.portal(), &LoginDraft::new("  Ravi ", "pw"))
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));

    session.complete_sign_in(&mut state, &profile);
    assert_eq!(state.username(), "Ravi");
    assert_eq!(state.portal(), Portal::Educator);
    assert_eq!(
        SessionService::welcome_toast(&profile),
        "🎉 Welcome, Ravi! Ready to learn?"
    );
    assert_eq!(session.greeting().label(), "Good Afternoon");
}

#[tokio::test(start_paused = true)]
async fn logout_after_sign_in_returns_to_learner() {
    let session = demo_session();
    let mut state = session.initial_state();
    let mut form = LoginDraft::new("Meena", "pw");
    let mut nav = NavigationState::default();
    session.switch_portal(&mut state, Portal::Educator);

    let profile = session.sign_in(state.portal(), &form).await.unwrap();
    session.complete_sign_in(&mut state, &profile);
    session.logout(&mut state, &mut form, &mut nav);

    assert_eq!(state.portal(), Portal::Learner);
    assert!(!state.is_signed_in());
    assert!(form.is_empty());
}

struct OfflineGateway;

#[async_trait::async_trait]
impl AuthGateway for OfflineGateway {
    async fn sign_in(
        &self,
        _credentials: &Credentials,
        _portal: Portal,
    ) -> Result<Profile, AuthError> {
        Err(AuthError::Unavailable("offline".to_string()))
    }
}

#[tokio::test]
async fn gateway_failures_surface_as_auth_errors() {
    let services = AppServices::with_auth(
        DemoConfig::default(),
        fixed_clock_at(9),
        Arc::new(OfflineGateway),
    )
    .unwrap();
    let err = services
        .session()
        .sign_in(Portal::Learner, &LoginDraft::new("asha", "pw"))
        .await
        .unwrap_err();
    assert!(!err.is_validation());
    assert_eq!(err.to_string(), "sign-in service unavailable: offline");
}
