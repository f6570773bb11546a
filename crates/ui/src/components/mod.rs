mod counter;
mod particles;
mod progress_bar;
mod toast;

pub use counter::AnimatedCounter;
pub use particles::ParticleField;
pub use progress_bar::ProgressBar;
pub use toast::ToastSurface;
