//! Request route encoding and decoding.
//!
//! The sole wire contract with the maze backend is one URL path:
//!
//! ```text
//! /maze/{width}/{height}/{seed}/rf={mask};rnum={count};mrsize={size}
//! ```
//!
//! All values are decimal. The backend decodes `rf` with the same bit
//! assignment as [`RoomType::bit`](crate::rooms::RoomType::bit), and the `;`
//! separator and the `rf`/`rnum`/`mrsize` key names are fixed on both sides.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::form::FormState;
use crate::rooms::RoomSet;

/// One fully specified generation request, ready to serialize.
///
/// Produced once per generation trigger and handed off immediately; it has
/// no identity beyond the route string it turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub width: u32,
    pub height: u32,
    /// Fresh per request; re-running generation with an otherwise identical
    /// form produces a different dungeon.
    pub seed: u32,
    pub room_filter: RoomSet,
    pub room_count: u32,
    pub max_room_size: u32,
}

impl RequestDescriptor {
    /// Encode the current form state, drawing a fresh seed from `rng`.
    pub fn from_form(form: &FormState, rng: &mut impl Rng) -> Self {
        RequestDescriptor {
            width: form.width,
            height: form.height,
            seed: rng.gen(),
            room_filter: form.enabled_rooms,
            room_count: form.room_count,
            max_room_size: form.max_room_size,
        }
    }

    /// [`from_form`](Self::from_form) with the thread-local generator.
    pub fn encode(form: &FormState) -> Self {
        Self::from_form(form, &mut rand::thread_rng())
    }

    /// Serialize to the backend route shape. The encoder's contract ends at
    /// producing this string; navigation belongs to the caller.
    pub fn route(&self) -> String {
        format!(
            "/maze/{}/{}/{}/rf={};rnum={};mrsize={}",
            self.width,
            self.height,
            self.seed,
            self.room_filter.bits(),
            self.room_count,
            self.max_room_size
        )
    }

    /// Parse a request route. Returns `None` when the path does not match
    /// the `/maze/{width}/{height}/{seed}` shape; a missing or partial
    /// parameter segment falls back to the service defaults instead.
    pub fn parse_route(route: &str) -> Option<Self> {
        let rest = route.strip_prefix("/maze/")?;
        let mut segments = rest.splitn(4, '/');
        let width = segments.next()?.parse().ok()?;
        let height = segments.next()?.parse().ok()?;
        let seed = segments.next()?.parse().ok()?;
        let args = segments.next().map(RouteArgs::parse).unwrap_or_default();
        Some(RequestDescriptor {
            width,
            height,
            seed,
            room_filter: RoomSet::from_bits(args.room_filter),
            room_count: args.room_count,
            max_room_size: args.max_room_size,
        })
    }
}

/// Decoded `key=value` parameters from the final route segment.
///
/// Parsing mirrors the backend's tolerance: pairs without `=`, unparsable
/// values, and unknown keys (the service also accepts e.g. `template`) are
/// skipped, and absent keys take the service defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteArgs {
    pub room_filter: u32,
    pub room_count: u32,
    pub max_room_size: u32,
}

impl Default for RouteArgs {
    fn default() -> Self {
        RouteArgs {
            room_filter: 0,
            room_count: 8,
            max_room_size: 8,
        }
    }
}

impl RouteArgs {
    /// Canonical parameter string for a default request.
    pub const DEFAULT_ARGS: &'static str = "rf=0;rnum=8;mrsize=8";

    pub fn parse(args: &str) -> Self {
        let mut parsed = RouteArgs::default();
        for pair in args.split(';') {
            let (key, value) = match pair.split_once('=') {
                Some(split) => split,
                None => continue,
            };
            match key {
                "rf" => {
                    if let Ok(v) = value.parse() {
                        parsed.room_filter = v;
                    }
                }
                "rnum" => {
                    if let Ok(v) = value.parse() {
                        parsed.room_count = v;
                    }
                }
                "mrsize" => {
                    if let Ok(v) = value.parse() {
                        parsed.max_room_size = v;
                    }
                }
                _ => {}
            }
        }
        parsed
    }
}
