use dioxus::prelude::*;
use gram_core::anim::PROGRESS_BAR_DELAY;

use crate::components::ProgressBar;
use crate::context::AppContext;
use crate::vm::map_courses;

#[component]
pub(super) fn ProgressPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let courses = map_courses(&catalog.courses);
    let lessons_done: u32 = catalog.courses.iter().map(|course| course.lessons_done).sum();
    let lessons_total: u32 = catalog.courses.iter().map(|course| course.lessons_total).sum();

    rsx! {
        section { class: "section active", id: "progress",
            p { class: "section-note", "{lessons_done} of {lessons_total} lessons completed across all subjects" }
            for course in courses {
                div { key: "{course.key}", class: "progress-row",
                    div { class: "progress-head",
                        span { "{course.icon} {course.title}" }
                        span { "{course.percent:.0}%" }
                    }
                    ProgressBar {
                        percent: course.percent,
                        delay: PROGRESS_BAR_DELAY,
                        fill_class: "course-fill",
                    }
                    div { class: "progress-meta", "{course.lessons}" }
                }
            }
        }
    }
}
