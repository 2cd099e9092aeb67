pub mod constants;
pub mod field;
pub mod layout;
pub mod lifecycle;
pub mod listeners;
pub mod mask;
pub mod overlay;
pub mod particle;
pub mod style;

pub use field::{FieldParams, ParticleField};
pub use layout::{TextLayout, Viewport};
pub use lifecycle::{FrameScheduler, MountGeneration};
pub use listeners::{EventRegistry, ListenerTarget, OverlayEvent};
pub use mask::AlphaMask;
pub use overlay::Overlay;
pub use particle::Pointer;
pub use style::{dot_style, DotStyle};
