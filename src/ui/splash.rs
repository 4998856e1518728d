pub mod timeline;

// Re-exports
pub use timeline::{
    intro_phase, loading_phase, logo_opacity, stage_status, SplashPhase, StageStatus, LOADING_STAGES,
};
