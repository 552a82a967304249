//!
//! The named aggregator presets.
//!

use std::collections::BTreeMap;

use super::independent::IndependentAggregator;
use super::ranking::RankingAggregator;
use super::Aggregator;

///
/// The aggregator constructor.
///
pub type Factory = Box<dyn Fn() -> Box<dyn Aggregator>>;

///
/// The named aggregator presets.
///
pub struct Registry {
    /// The aggregator constructors by name.
    presets: BTreeMap<String, Factory>,
}

impl Registry {
    /// The arithmetic mean preset name.
    pub const MEAN: &'static str = "mean";

    /// The ranking preset name.
    pub const RANKING: &'static str = "ranking";

    /// The preset used if none is requested.
    pub const DEFAULT: &'static str = Self::MEAN;

    ///
    /// Registers the aggregator constructor, replacing any preset with the same name.
    ///
    pub fn register<F>(&mut self, name: String, factory: F)
    where
        F: Fn() -> Box<dyn Aggregator> + 'static,
    {
        self.presets.insert(name, Box::new(factory));
    }

    ///
    /// Constructs the aggregator registered under the name.
    ///
    pub fn get(&self, name: &str) -> anyhow::Result<Box<dyn Aggregator>> {
        match self.presets.get(name) {
            Some(factory) => Ok(factory()),
            None => anyhow::bail!(
                "Unknown aggregator `{name}`. Available aggregators: {}",
                self.names().collect::<Vec<&str>>().join(", ")
            ),
        }
    }

    ///
    /// Constructs the requested aggregator, or the default one.
    ///
    pub fn get_or_default(&self, name: Option<&str>) -> anyhow::Result<Box<dyn Aggregator>> {
        self.get(name.unwrap_or(Self::DEFAULT))
    }

    ///
    /// Returns the registered names in alphabetical order.
    ///
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self {
            presets: BTreeMap::new(),
        };
        registry.register(Self::MEAN.to_owned(), || {
            Box::new(IndependentAggregator::mean())
        });
        registry.register(Self::RANKING.to_owned(), || Box::new(RankingAggregator));
        registry
    }
}
