//! # Share-Link Queries
//!
//! Encodes a parameter set into a URL query string and decodes one back.
//! Decoding is lenient: anything that cannot be read falls back to the
//! field's default before clamping.

use crate::field::ParamField;
use crate::params::{BraidParams, RawBraidParams};
use tracing::warn;
use url::form_urlencoded;

impl BraidParams {
    /// Encodes the parameters as `radius=..&length=..&strandCount=..&angleDeg=..&tension=..`.
    ///
    /// Numbers use the shortest decimal text that round-trips.
    ///
    /// # Example
    ///
    /// ```rust
    /// use braid_params::BraidParams;
    ///
    /// assert_eq!(
    ///     BraidParams::default().to_query_string(),
    ///     "radius=12&length=120&strandCount=24&angleDeg=55&tension=0.55"
    /// );
    /// ```
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(ParamField::Radius.key(), &self.radius().to_string());
        serializer.append_pair(ParamField::Length.key(), &self.length().to_string());
        serializer.append_pair(
            ParamField::StrandCount.key(),
            &self.strand_count().to_string(),
        );
        serializer.append_pair(ParamField::AngleDeg.key(), &self.angle_deg().to_string());
        serializer.append_pair(ParamField::Tension.key(), &self.tension().to_string());
        serializer.finish()
    }

    /// Decodes a share-link query. A leading `?` is accepted, unknown keys
    /// are ignored and only the first occurrence of a key counts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use braid_params::BraidParams;
    ///
    /// let params = BraidParams::from_query_string("?radius=3&strandCount=abc&tension=7");
    /// assert_eq!(params.radius(), 3.0);
    /// assert_eq!(params.strand_count(), 24);
    /// assert_eq!(params.tension(), 1.0);
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut seen = [false; ParamField::ALL.len()];
        let mut raw = RawBraidParams::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let Some(field) = ParamField::from_key(&key) else {
                continue;
            };
            let slot = field as usize;
            if seen[slot] {
                continue;
            }
            seen[slot] = true;

            match value.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => {
                    raw.set(field, number);
                }
                _ => {
                    warn!(%field, value = %value, "unreadable share-link value, using default");
                }
            }
        }

        raw.sanitize()
    }

    /// Builds a complete share link for `origin`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use braid_params::BraidParams;
    ///
    /// let link = BraidParams::default().share_link("https://example.com");
    /// assert!(link.starts_with("https://example.com?radius=12&"));
    /// ```
    pub fn share_link(&self, origin: &str) -> String {
        format!("{origin}?{}", self.to_query_string())
    }
}
