// Intro and loading screen timelines (pure, millisecond clock)

pub const INTRO_LOGO_DELAY_MS: u64 = 300;
pub const INTRO_LOGO_FADE_IN_MS: u64 = 2000;

/// When a splash ends on its own and how long its fade-out runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTimeline {
    pub complete_at_ms: u64,
    pub fade_ms: u64,
    /// Fade length after the user skips
    pub skip_fade_ms: u64,
}

pub const INTRO: SplashTimeline = SplashTimeline {
    complete_at_ms: 3500,
    fade_ms: 500,
    skip_fade_ms: 500,
};

pub const LOADING: SplashTimeline = SplashTimeline {
    complete_at_ms: 5500,
    fade_ms: 1000,
    skip_fade_ms: 500,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashPhase {
    Showing,
    /// `progress` runs 0.0 -> 1.0 over the fade
    FadingOut { progress: f32 },
    Done,
}

impl SplashPhase {
    pub fn is_done(self) -> bool {
        matches!(self, SplashPhase::Done)
    }

    /// Opacity of the splash content for this phase
    pub fn opacity(self) -> f32 {
        match self {
            SplashPhase::Showing => 1.0,
            SplashPhase::FadingOut { progress } => 1.0 - progress,
            SplashPhase::Done => 0.0,
        }
    }
}

/// Phase of a splash `elapsed_ms` after it appeared, optionally skipped at `skipped_at_ms`
pub fn splash_phase(timeline: &SplashTimeline, elapsed_ms: u64, skipped_at_ms: Option<u64>) -> SplashPhase {
    let (fade_start, fade_ms) = match skipped_at_ms {
        Some(skip) if skip < timeline.complete_at_ms => (skip, timeline.skip_fade_ms),
        _ => (timeline.complete_at_ms, timeline.fade_ms),
    };

    if elapsed_ms < fade_start {
        SplashPhase::Showing
    } else if elapsed_ms < fade_start + fade_ms {
        let progress = (elapsed_ms - fade_start) as f32 / fade_ms as f32;
        SplashPhase::FadingOut { progress }
    } else {
        SplashPhase::Done
    }
}

pub fn intro_phase(elapsed_ms: u64, skipped_at_ms: Option<u64>) -> SplashPhase {
    splash_phase(&INTRO, elapsed_ms, skipped_at_ms)
}

pub fn loading_phase(elapsed_ms: u64, skipped_at_ms: Option<u64>) -> SplashPhase {
    splash_phase(&LOADING, elapsed_ms, skipped_at_ms)
}

/// Logo opacity on the intro: hidden, then a linear fade in
pub fn logo_opacity(elapsed_ms: u64) -> f32 {
    if elapsed_ms < INTRO_LOGO_DELAY_MS {
        return 0.0;
    }
    let t = (elapsed_ms - INTRO_LOGO_DELAY_MS) as f32 / INTRO_LOGO_FADE_IN_MS as f32;
    t.min(1.0)
}

pub const STAGE_LOADING_MS: u64 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingStage {
    pub name: &'static str,
    pub delay_ms: u64,
}

pub const LOADING_STAGES: [LoadingStage; 4] = [
    LoadingStage { name: "LIVE TV", delay_ms: 0 },
    LoadingStage { name: "VOD", delay_ms: 800 },
    LoadingStage { name: "SERIES", delay_ms: 1600 },
    LoadingStage { name: "EPG GUIDE", delay_ms: 2400 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Waiting,
    Loading,
    Completed,
}

impl StageStatus {
    pub fn label(self) -> &'static str {
        match self {
            StageStatus::Waiting => "Waiting...",
            StageStatus::Loading => "Loading...",
            StageStatus::Completed => "Completed!",
        }
    }
}

pub fn stage_status(delay_ms: u64, elapsed_ms: u64) -> StageStatus {
    if elapsed_ms < delay_ms {
        StageStatus::Waiting
    } else if elapsed_ms < delay_ms + STAGE_LOADING_MS {
        StageStatus::Loading
    } else {
        StageStatus::Completed
    }
}
