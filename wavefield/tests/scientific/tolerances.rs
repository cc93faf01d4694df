#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLevel {
    Pr,
    Nightly,
}

impl SampleLevel {
    pub fn from_env() -> Self {
        match std::env::var("WAVEFIELD_SCI_SAMPLE_LEVEL")
            .unwrap_or_else(|_| "pr".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "nightly" => Self::Nightly,
            _ => Self::Pr,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScientificTolerances {
    pub normalization_abs: f64,
    pub reference_rel: f64,
    pub reference_abs: f64,
    pub stationary_rel: f64,
    pub spreading_rel: f64,
    pub grid_points: usize,
    pub radial_steps: usize,
    pub frames: usize,
}

pub fn sample_level() -> SampleLevel {
    SampleLevel::from_env()
}

pub fn current_tolerances() -> ScientificTolerances {
    match sample_level() {
        SampleLevel::Pr => ScientificTolerances {
            normalization_abs: 1.0e-5,
            reference_rel: 1.0e-9,
            reference_abs: 1.0e-12,
            stationary_rel: 1.0e-9,
            spreading_rel: 1.0e-4,
            grid_points: 8_001,
            radial_steps: 20_001,
            frames: 8,
        },
        SampleLevel::Nightly => ScientificTolerances {
            normalization_abs: 1.0e-7,
            reference_rel: 1.0e-10,
            reference_abs: 1.0e-13,
            stationary_rel: 1.0e-10,
            spreading_rel: 1.0e-5,
            grid_points: 40_001,
            radial_steps: 100_001,
            frames: 32,
        },
    }
}
