use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_courses;

#[component]
pub(super) fn CoursesPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let courses = map_courses(&ctx.catalog().courses);

    rsx! {
        section { class: "section active", id: "courses",
            div { class: "course-grid",
                for course in courses {
                    div { key: "{course.key}", class: "course-card",
                        div { class: "course-card-icon", "{course.icon}" }
                        h3 { "{course.title}" }
                        p { "{course.lessons}" }
                        span { class: "course-percent", "{course.percent:.0}% complete" }
                    }
                }
            }
        }
    }
}
