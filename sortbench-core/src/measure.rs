//! High-Precision Timing
//!
//! Single-shot measurement of one unit of work. Wall-clock time comes from
//! `std::time::Instant`; RDTSCP on x86_64 and CNTVCT_EL0 on AArch64 add a
//! cycle count alongside it.
//!
//! The harness runs the work exactly once. There is no warmup and no
//! averaging: the reported figure is the cost of that one run. Executors
//! carry both figures into every benchmark entry.

// ─── Inline cycle counter helpers ────────────────────────────────────────────

/// Read the CPU cycle/tick counter (platform-specific).
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles() -> u64 {
    // SAFETY: RDTSCP is available on all x86_64 CPUs since ~2006.
    unsafe {
        let mut _aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut _aux)
    }
}

/// Read the virtual counter timer on AArch64 (comparable to x86 TSC).
#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles() -> u64 {
    let cnt: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0 on all AArch64 implementations.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt, options(nostack, nomem));
    }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_cycles() -> u64 {
    0
}

/// Whether this platform provides real cycle counters.
pub const HAS_CYCLE_COUNTER: bool = cfg!(target_arch = "x86_64") || cfg!(target_arch = "aarch64");

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Stopwatch started immediately before the measured work
pub struct Timer {
    start: std::time::Instant,
    cycles_start: u64,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        let cycles_start = read_cycles();
        Self {
            start: std::time::Instant::now(),
            cycles_start,
        }
    }

    /// Stop the timer and return elapsed nanoseconds and cycles
    #[inline(always)]
    pub fn stop(&self) -> (u64, u64) {
        let elapsed = self.start.elapsed();
        let nanos = elapsed.as_nanos() as u64;
        let cycles = read_cycles().saturating_sub(self.cycles_start);
        (nanos, cycles)
    }
}

// ─── Harness ─────────────────────────────────────────────────────────────────

/// The value produced by a measured unit of work, with its cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured<R> {
    /// Whatever the work returned
    pub value: R,
    /// Elapsed wall-clock nanoseconds
    pub nanos: u64,
    /// Elapsed CPU cycles (0 without a cycle counter)
    pub cycles: u64,
}

impl<R> Measured<R> {
    /// Elapsed time in milliseconds with sub-millisecond precision
    pub fn millis(&self) -> f64 {
        self.nanos as f64 / 1_000_000.0
    }

    /// Elapsed time in microseconds
    pub fn micros(&self) -> f64 {
        self.nanos as f64 / 1_000.0
    }
}

/// Run `work` exactly once and time it.
///
/// Panics unwind through unchanged. A `Result` returned by `work` comes back
/// untouched in [`Measured::value`], so callers decide how to propagate it.
#[inline]
pub fn measure<R>(work: impl FnOnce() -> R) -> Measured<R> {
    let timer = Timer::start();
    let value = std::hint::black_box(work());
    let (nanos, cycles) = timer.stop();
    Measured {
        value,
        nanos,
        cycles,
    }
}

/// Run `work` once and return its value with the elapsed milliseconds.
#[inline]
pub fn measure_millis<R>(work: impl FnOnce() -> R) -> (R, f64) {
    let measured = measure(work);
    let millis = measured.millis();
    (measured.value, millis)
}

/// Run `work` once and return its value with the elapsed microseconds.
#[inline]
pub fn measure_micros<R>(work: impl FnOnce() -> R) -> (R, f64) {
    let measured = measure(work);
    let micros = measured.micros();
    (measured.value, micros)
}
