use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use gram_core::model::{Catalog, Portal};
use gram_core::time::fixed_clock_at;
use services::{AppServices, DemoConfig, NavigationState, SessionService};

use crate::components::ToastSurface;
use crate::context::{UiApp, build_app_context};
use crate::store::UiState;
use crate::views::{DashboardView, LoginView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<SessionService> {
        self.services.session()
    }

    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn config(&self) -> DemoConfig {
        self.services.config()
    }

    fn particle_seed(&self) -> Option<u64> {
        Some(7)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Dashboard,
}

/// Session the harness starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessSeed {
    pub portal: Portal,
    pub username: &'static str,
    pub section: &'static str,
}

impl Default for HarnessSeed {
    fn default() -> Self {
        Self {
            portal: Portal::Learner,
            username: "Asha",
            section: "overview",
        }
    }
}

/// Live state reachable from tests once the harness is built.
#[derive(Clone)]
pub struct HarnessHandles {
    pub ui: UiState,
    pub view: Signal<ViewKind>,
    pub service: Arc<SessionService>,
}

type HandleSlot = Rc<RefCell<Option<HarnessHandles>>>;

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: HarnessSeed,
    handles: HandleSlot,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let view = use_context_provider(|| Signal::new(props.view));
    let ui = use_context_provider(|| {
        let service = ctx.session();
        let mut state = service.initial_state();
        service.switch_portal(&mut state, props.seed.portal);
        state.set_username(props.seed.username);
        let mut nav = NavigationState::default();
        let viewport = ctx.config().viewport;
        nav.navigate(props.seed.section, viewport);
        UiState {
            nav: Signal::new(nav),
            ..UiState::new(state, service.greeting(), viewport)
        }
    });
    use_hook(|| {
        *props.handles.borrow_mut() = Some(HarnessHandles {
            ui,
            view,
            service: ctx.session(),
        });
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<Signal<ViewKind>>();
    rsx! {
        match view() {
            ViewKind::Login => rsx! { LoginView {} },
            ViewKind::Dashboard => rsx! { DashboardView {} },
        }
        ToastSurface {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HandleSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Keep driving until `duration` of tokio time has passed.
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn handles(&self) -> HarnessHandles {
        self.handles.borrow().clone().expect("harness not built yet")
    }

    /// Run `action` inside the dom runtime, then flush the resulting renders.
    pub fn act(&mut self, action: impl FnOnce(&HarnessHandles)) {
        let handles = self.handles();
        self.dom.in_runtime(|| action(&handles));
        drive_dom(&mut self.dom);
    }

    pub fn read<R>(&self, query: impl FnOnce(&HarnessHandles) -> R) -> R {
        let handles = self.handles();
        self.dom.in_runtime(|| query(&handles))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, seed: HarnessSeed) -> ViewHarness {
    setup_view_harness_with_config(view, seed, DemoConfig::default().instant())
}

pub fn setup_view_harness_with_config(
    view: ViewKind,
    seed: HarnessSeed,
    config: DemoConfig,
) -> ViewHarness {
    let services = AppServices::demo(config, fixed_clock_at(9)).expect("demo services");
    let app = Arc::new(TestApp { services });
    let handles = HandleSlot::default();
    let props = ViewHarnessProps {
        app,
        view,
        seed,
        handles: Rc::clone(&handles),
    };
    let dom = VirtualDom::new_with_props(ViewRouterHarness, props);
    ViewHarness { dom, handles }
}
