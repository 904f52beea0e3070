// Copyright (C) 2024 Armkin Project
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::Path;

use serde::Deserialize;

/// Arm description profile.
///
/// Loaded from a TOML file, for example:
///
/// ```toml
/// [arm]
/// l1 = 1.0
/// l2 = 0.8
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    /// Arm link lengths.
    pub arm: ArmProfile,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ArmProfile {
    /// Length of link 1, shoulder to elbow, in meters.
    pub l1: f64,
    /// Length of link 2, elbow to effector, in meters.
    pub l2: f64,
}

impl Profile {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let str = std::fs::read_to_string(path)?;
        let profile = toml::from_str(&str)?;

        Ok(profile)
    }
}
