use rand::prelude::*;

/// Seedable RNG shared by the decisions of one agent.
#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct RngState(pub SmallRng);

/// Where an agent's random numbers come from: a seed, an existing generator, or entropy.
#[derive(Debug, Clone, Default)]
pub enum RngSource {
    Seed(u64),
    Generator(RngState),
    #[default]
    Entropy,
}

impl RngState {
    /// Resolves a source into a generator. This is the only place seeds are turned into
    /// generators.
    pub fn new(source: impl Into<RngSource>) -> Self {
        match source.into() {
            RngSource::Seed(seed) => Self(SmallRng::seed_from_u64(seed)),
            RngSource::Generator(rng) => rng,
            RngSource::Entropy => Self(SmallRng::from_entropy()),
        }
    }

    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl Default for RngState {
    fn default() -> Self {
        Self::new(RngSource::Entropy)
    }
}

impl RngCore for RngState {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl From<SmallRng> for RngState {
    fn from(value: SmallRng) -> Self {
        Self(value)
    }
}

impl From<u64> for RngSource {
    fn from(seed: u64) -> Self {
        Self::Seed(seed)
    }
}

impl From<Option<u64>> for RngSource {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Seed)
    }
}

impl From<RngState> for RngSource {
    fn from(rng: RngState) -> Self {
        Self::Generator(rng)
    }
}

impl From<SmallRng> for RngSource {
    fn from(rng: SmallRng) -> Self {
        Self::Generator(rng.into())
    }
}
