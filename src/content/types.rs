//! Landing-page copy shown in the hero and the feature grid.

use serde::Deserialize;

/// Number of cards in the feature grid.
pub const FEATURE_COUNT: usize = 3;

/// One card in the feature grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Feature {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
}

impl Feature {
	fn new(title: &str, description: &str) -> Self {
		Self {
			title: title.to_string(),
			description: description.to_string(),
		}
	}
}

/// Hero headline, subheadline and feature cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AppDescription {
	#[serde(default)]
	pub headline: String,
	#[serde(default)]
	pub subheadline: String,
	#[serde(default)]
	pub features: Vec<Feature>,
}

impl AppDescription {
	/// Built-in copy used whenever generated content is unavailable.
	pub fn fallback() -> Self {
		Self {
			headline: "PREMIUM MINING ENGINE".to_string(),
			subheadline: "The industry's most efficient mobile mining utility. \
				High-performance analysis and secure node connectivity."
				.to_string(),
			features: vec![
				Feature::new(
					"Peak Hashrate",
					"Optimized algorithms for maximum hardware efficiency.",
				),
				Feature::new(
					"Secure Node",
					"Encrypted communication for safe data transmission.",
				),
				Feature::new(
					"Smart Metrics",
					"Real-time performance tracking and analytics.",
				),
			],
		}
	}

	/// Fill every blank field from the fallback copy of the same slot and
	/// force exactly [`FEATURE_COUNT`] features.
	pub fn with_fallbacks(self) -> Self {
		let fallback = Self::fallback();
		let mut features = self.features;
		features.truncate(FEATURE_COUNT);

		let features = fallback
			.features
			.into_iter()
			.enumerate()
			.map(|(i, default)| match features.get_mut(i) {
				Some(f) => Feature {
					title: or_default(std::mem::take(&mut f.title), default.title),
					description: or_default(std::mem::take(&mut f.description), default.description),
				},
				None => default,
			})
			.collect();

		Self {
			headline: or_default(self.headline, fallback.headline),
			subheadline: or_default(self.subheadline, fallback.subheadline),
			features,
		}
	}

	/// Whether every field is filled and the grid has exactly
	/// [`FEATURE_COUNT`] cards.
	pub fn is_complete(&self) -> bool {
		!self.headline.trim().is_empty()
			&& !self.subheadline.trim().is_empty()
			&& self.features.len() == FEATURE_COUNT
			&& self
				.features
				.iter()
				.all(|f| !f.title.trim().is_empty() && !f.description.trim().is_empty())
	}
}

fn or_default(value: String, default: String) -> String {
	if value.trim().is_empty() {
		default
	} else {
		value
	}
}
