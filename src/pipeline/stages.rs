//! The six pipeline stages
//!
//! Each stage takes the current [`SessionState`] by reference and returns the
//! next state together with the plot it produces. Stages never mutate their
//! input; a stage whose prerequisites are missing returns a
//! missing-precondition error and the caller keeps the old state.

use crate::domain::{AmError, AmResult, Configuration, Frequency, PlotData, Signal, TimeGrid};
use crate::dsp::{BrickWallLowPass, Carrier, FftProcessor, NoiseInjector};

use super::session::{SessionState, Stage};

/// Frequency of the generated baseband cosine, in Hz
pub const BASE_FREQUENCY_HZ: f64 = 1.0;

/// New state plus what to draw
#[derive(Debug, Clone)]
pub struct StageOutput {
    pub state: SessionState,
    pub plot: PlotData,
}

/// Owns the fixed time grid, cached transforms, and noise source
pub struct Pipeline {
    grid: TimeGrid,
    fft: FftProcessor,
    noise: NoiseInjector,
    lowpass: BrickWallLowPass,
    max_carrier_hz: f64,
}

impl Pipeline {
    /// Build a pipeline on the standard grid from a configuration profile
    pub fn new(config: &Configuration) -> AmResult<Self> {
        config.validate()?;
        let grid = TimeGrid::standard();
        let fft = FftProcessor::new(grid.len());
        let noise = NoiseInjector::new(config.noise_std_dev, config.seed)?;
        log::info!(
            "pipeline ready: {} samples, noise σ = {}, seed = {:?}",
            grid.len(),
            config.noise_std_dev,
            config.seed
        );
        Ok(Self {
            grid,
            fft,
            noise,
            lowpass: BrickWallLowPass::default(),
            max_carrier_hz: config.max_carrier_hz,
        })
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn fft(&self) -> &FftProcessor {
        &self.fft
    }

    /// Standard deviation of the live noise source
    pub fn noise_std_dev(&self) -> f64 {
        self.noise.std_dev()
    }

    /// The 1 Hz baseband cosine on the time grid
    pub fn base_signal(&self) -> Signal {
        Carrier::new(Frequency::hz(BASE_FREQUENCY_HZ)).sample(&self.grid)
    }

    /// Generate the base cosine. Always succeeds.
    pub fn generate(&self, state: &SessionState) -> StageOutput {
        let signal = self.base_signal();
        let plot = PlotData::time_domain("Cosine signal", &self.grid, signal.clone());
        log::info!("generated {BASE_FREQUENCY_HZ} Hz cosine");
        StageOutput {
            state: state.with_signal(signal),
            plot,
        }
    }

    /// Add a fresh noise draw to the base signal
    pub fn add_noise(&mut self, state: &SessionState) -> AmResult<StageOutput> {
        let signal = state.signal().ok_or(AmError::MissingSignal)?;
        let noisy = self.noise.apply(signal);
        let plot = PlotData::time_domain("Signal with noise", &self.grid, noisy.clone());
        log::info!("added noise (σ = {})", self.noise.std_dev());
        Ok(StageOutput {
            state: state.with_noisy(noisy),
            plot,
        })
    }

    /// Magnitude spectrum of the noisy signal
    pub fn spectrum(&self, state: &SessionState) -> AmResult<StageOutput> {
        let noisy = state.noisy().ok_or(AmError::MissingNoisySignal)?;
        let spectrum = self.fft.magnitude_spectrum(noisy);
        log::debug!("noisy spectrum peaks at bin {:?}", spectrum.peak_bin());
        let plot = PlotData::spectrum("Noisy signal spectrum", spectrum);
        Ok(StageOutput {
            state: state.with_view(Stage::Spectrum),
            plot,
        })
    }

    /// Multiply the noisy signal onto a carrier at `carrier_hz`
    pub fn shift(&self, state: &SessionState, carrier_hz: f64) -> AmResult<StageOutput> {
        let noisy = state.noisy().ok_or(AmError::MissingNoisySignal)?;
        let carrier = self.validate_carrier(carrier_hz)?;

        let shifted = Carrier::new(carrier).mix(&self.grid, noisy)?;
        let spectrum = self.fft.magnitude_spectrum(&shifted);
        log::info!(
            "shifted noisy signal onto {carrier_hz} Hz carrier, peak at bin {:?}",
            spectrum.peak_bin()
        );
        let plot = PlotData::spectrum("Shifted signal spectrum", spectrum);
        Ok(StageOutput {
            state: state.with_shifted(shifted, carrier),
            plot,
        })
    }

    /// Spectrum of the coherently demodulated signal
    pub fn demodulate(&self, state: &SessionState) -> AmResult<StageOutput> {
        let demodulated = self.demodulated(state)?;
        let spectrum = self.fft.magnitude_spectrum(&demodulated);
        log::debug!("demodulated spectrum peaks at bin {:?}", spectrum.peak_bin());
        let plot = PlotData::spectrum("Coherent demodulation spectrum", spectrum);
        Ok(StageOutput {
            state: state.with_view(Stage::Demodulate),
            plot,
        })
    }

    /// Low-pass the demodulated signal and show the reconstruction
    pub fn lowpass(&self, state: &SessionState) -> AmResult<StageOutput> {
        let demodulated = self.demodulated(state)?;
        let filtered = self.lowpass.apply(&self.fft, &demodulated);
        let plot = PlotData::time_domain("Low-pass reconstruction", &self.grid, filtered.real());
        log::info!("reconstructed baseband with cutoff {}", self.lowpass.cutoff());
        Ok(StageOutput {
            state: state.with_view(Stage::LowPass),
            plot,
        })
    }

    /// `noisy · cos(ωt) · cos(ωt)` for the stored carrier.
    ///
    /// Gated on a shift having run, but always recomputed from the current
    /// noisy signal; the stored shifted signal is never read here.
    pub fn demodulated(&self, state: &SessionState) -> AmResult<Signal> {
        if state.shifted().is_none() {
            return Err(AmError::MissingShiftedSignal);
        }
        let carrier = Carrier::new(state.carrier().ok_or(AmError::MissingCarrier)?);
        let noisy = state.noisy().ok_or(AmError::MissingNoisySignal)?;
        if state.shifted_is_stale() {
            log::debug!("stored shifted signal is stale; recomputing from current noisy signal");
        }

        let shifted = carrier.mix(&self.grid, noisy)?;
        carrier.mix(&self.grid, &shifted)
    }

    fn validate_carrier(&self, carrier_hz: f64) -> AmResult<Frequency> {
        if !carrier_hz.is_finite() || !(0.0..=self.max_carrier_hz).contains(&carrier_hz) {
            log::warn!("rejected carrier {carrier_hz} Hz");
            return Err(AmError::InvalidCarrier(format!(
                "{carrier_hz} Hz is outside 0-{} Hz",
                self.max_carrier_hz
            )));
        }
        Ok(Frequency::hz(carrier_hz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn pipeline() -> Pipeline {
        let config = Configuration {
            seed: Some(1234),
            ..Configuration::default()
        };
        Pipeline::new(&config).unwrap()
    }

    fn shifted_state(p: &mut Pipeline, carrier_hz: f64) -> SessionState {
        let s = p.generate(&SessionState::new()).state;
        let s = p.add_noise(&s).unwrap().state;
        p.shift(&s, carrier_hz).unwrap().state
    }

    #[test]
    fn generate_matches_cosine_on_grid() {
        let p = pipeline();
        let out = p.generate(&SessionState::new());
        let signal = out.state.signal().unwrap();

        assert_eq!(signal.len(), 1000);
        for (i, &v) in signal.iter().enumerate() {
            let t = 10.0 * i as f64 / 999.0;
            assert!((v - (2.0 * PI * t).cos()).abs() < 1e-12, "sample {i}");
        }
        assert_eq!(out.plot.x, p.grid().instants());
        assert_eq!(out.state.last_view(), Some(Stage::Generate));
    }

    #[test]
    fn add_noise_without_signal_is_precondition_error() {
        let mut p = pipeline();
        let err = p.add_noise(&SessionState::new()).unwrap_err();
        assert!(matches!(err, AmError::MissingSignal));
    }

    #[test]
    fn spectrum_without_noise_is_precondition_error() {
        let mut p = pipeline();
        let s = p.generate(&SessionState::new()).state;
        assert!(matches!(p.spectrum(&s), Err(AmError::MissingNoisySignal)));
        assert!(matches!(p.shift(&s, 5.0), Err(AmError::MissingNoisySignal)));
        let s = p.add_noise(&s).unwrap().state;
        let out = p.spectrum(&s).unwrap();
        assert_eq!(out.plot.x.len(), 500);
    }

    #[test]
    fn demodulate_and_lowpass_require_shift() {
        let mut p = pipeline();
        let s = p.generate(&SessionState::new()).state;
        let s = p.add_noise(&s).unwrap().state;
        assert!(matches!(p.demodulate(&s), Err(AmError::MissingShiftedSignal)));
        assert!(matches!(p.lowpass(&s), Err(AmError::MissingShiftedSignal)));
    }

    #[test]
    fn shift_rejects_out_of_range_carrier() {
        let mut p = pipeline();
        let s = p.generate(&SessionState::new()).state;
        let s = p.add_noise(&s).unwrap().state;
        assert!(matches!(p.shift(&s, -1.0), Err(AmError::InvalidCarrier(_))));
        assert!(matches!(p.shift(&s, 60_000.0), Err(AmError::InvalidCarrier(_))));
        assert!(matches!(p.shift(&s, f64::NAN), Err(AmError::InvalidCarrier(_))));
        assert!(p.shift(&s, 50_000.0).is_ok());
    }

    #[test]
    fn shift_stores_carrier_and_signal() {
        let mut p = pipeline();
        let s = shifted_state(&mut p, 5.0);
        assert_eq!(s.carrier(), Some(Frequency::hz(5.0)));
        let noisy = s.noisy().unwrap();
        let expected = Carrier::new(Frequency::hz(5.0)).mix(p.grid(), noisy).unwrap();
        assert_eq!(s.shifted().unwrap(), &expected);
    }

    #[test]
    fn demodulated_recomputes_from_current_noise() {
        let mut p = pipeline();
        let s = shifted_state(&mut p, 5.0);
        let renoised = p.add_noise(&s).unwrap().state;
        assert!(renoised.shifted_is_stale());

        let demod = p.demodulated(&renoised).unwrap();
        let carrier = Carrier::new(Frequency::hz(5.0)).sample(p.grid());
        for ((d, n), c) in demod.iter().zip(renoised.noisy().unwrap()).zip(&carrier) {
            assert!((d - n * c * c).abs() < 1e-12);
        }
    }

    #[test]
    fn noise_std_dev_follows_configuration() {
        assert_eq!(pipeline().noise_std_dev(), 1.0);
        let low = Pipeline::new(&Configuration::low_noise()).unwrap();
        assert_eq!(low.noise_std_dev(), 0.1);
    }

    #[test]
    fn stages_do_not_mutate_input_state() {
        let mut p = pipeline();
        let s = shifted_state(&mut p, 5.0);
        let before = s.clone();
        let _ = p.generate(&s);
        let _ = p.add_noise(&s).unwrap();
        let _ = p.spectrum(&s).unwrap();
        let _ = p.shift(&s, 9.0).unwrap();
        let _ = p.demodulate(&s).unwrap();
        let _ = p.lowpass(&s).unwrap();
        assert_eq!(s, before);
    }
}
