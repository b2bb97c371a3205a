//! Forgeon Headless Validation Harness
//!
//! Validates the request-builder logic and data without a browser.
//! Runs entirely in-process — no web server, no DOM, no rendering.
//!
//! Usage:
//!   cargo run -p forgeon-simtest
//!   cargo run -p forgeon-simtest -- --verbose

use forgeon_logic::form::FormState;
use forgeon_logic::presets::{apply_preset, lookup, presets};
use forgeon_logic::randomize::random_request;
use forgeon_logic::request::{RequestDescriptor, RouteArgs};
use forgeon_logic::rooms::{RoomSet, RoomType};
use serde::Deserialize;

// ── Preset manifest (same data a deployment would edit) ─────────────────
const MANIFEST_JSON: &str = include_str!("../../../data/preset_manifest.json");

#[derive(Debug, Deserialize)]
struct PresetSpec {
    name: String,
    required_rooms: Vec<String>,
    min_rooms: u32,
    max_room_size: u32,
    width: u32,
    height: u32,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Forgeon Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Room-type catalog
    results.extend(validate_room_catalog(verbose));

    // 2. Preset manifest vs. built-in catalog
    results.extend(validate_preset_manifest(verbose));

    // 3. Preset application sweep
    results.extend(validate_preset_application(verbose));

    // 4. Route encoding
    results.extend(validate_route_encoding(verbose));

    // 5. Route decoding
    results.extend(validate_route_decoding(verbose));

    // 6. Randomized request sweep
    results.extend(validate_randomized_requests(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Room-type catalog ────────────────────────────────────────────────

fn validate_room_catalog(verbose: bool) -> Vec<TestResult> {
    println!("--- Room-Type Catalog ---");
    let mut results = Vec::new();

    if verbose {
        for room in RoomType::all() {
            let info = room.info();
            println!(
                "  bit {:>2}  [{}] {:<14} ({})",
                room.bit(),
                info.symbol,
                info.label,
                info.color
            );
        }
    }

    let in_bit_order = RoomType::all()
        .iter()
        .enumerate()
        .all(|(i, r)| r.bit() as usize == i);
    results.push(TestResult {
        name: "rooms_bit_order".into(),
        passed: in_bit_order,
        detail: format!("{} room types in bit order", RoomType::all().len()),
    });

    let mut labels = std::collections::HashSet::new();
    let mut symbols = std::collections::HashSet::new();
    for room in RoomType::all() {
        labels.insert(room.info().label);
        symbols.insert(room.info().symbol);
    }
    results.push(TestResult {
        name: "rooms_labels_unique".into(),
        passed: labels.len() == RoomType::all().len(),
        detail: format!("{} distinct labels", labels.len()),
    });
    results.push(TestResult {
        name: "rooms_symbols_unique".into(),
        passed: symbols.len() == RoomType::all().len(),
        detail: format!("{} distinct symbols", symbols.len()),
    });

    let label_roundtrip = RoomType::all()
        .iter()
        .all(|r| RoomType::from_label(r.info().label) == Some(*r));
    results.push(TestResult {
        name: "rooms_label_lookup".into(),
        passed: label_roundtrip,
        detail: "every label resolves to its room type".into(),
    });

    let mask_width_ok = RoomType::all().len() <= 32 && RoomSet::full().bits() == (1 << RoomType::all().len()) - 1;
    results.push(TestResult {
        name: "rooms_mask_width".into(),
        passed: mask_width_ok,
        detail: format!("full mask = {:#b}", RoomSet::full().bits()),
    });

    results
}

// ── 2. Preset manifest ──────────────────────────────────────────────────

fn validate_preset_manifest(verbose: bool) -> Vec<TestResult> {
    println!("--- Preset Manifest ---");
    let mut results = Vec::new();

    let manifest: Vec<PresetSpec> = match serde_json::from_str(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult {
                name: "manifest_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };
    results.push(TestResult {
        name: "manifest_parse".into(),
        passed: true,
        detail: format!("{} presets", manifest.len()),
    });

    results.push(TestResult {
        name: "manifest_covers_catalog".into(),
        passed: manifest.len() == presets().len()
            && presets().iter().all(|p| manifest.iter().any(|s| s.name == p.name)),
        detail: format!("catalog has {}, manifest has {}", presets().len(), manifest.len()),
    });

    for spec in &manifest {
        if verbose {
            println!(
                "  {:<14} rooms={} min={} mrsize={} dims={}x{}",
                spec.name,
                spec.required_rooms.len(),
                spec.min_rooms,
                spec.max_room_size,
                spec.width,
                spec.height
            );
        }

        let unknown: Vec<&String> = spec
            .required_rooms
            .iter()
            .filter(|label| RoomType::from_label(label).is_none())
            .collect();
        results.push(TestResult {
            name: format!("manifest_{}_rooms_known", spec.name),
            passed: unknown.is_empty(),
            detail: if unknown.is_empty() {
                "all required rooms known".into()
            } else {
                format!("unknown labels: {:?}", unknown)
            },
        });

        let (agrees, detail) = match lookup(&spec.name) {
            Some(preset) => {
                let rooms: Vec<RoomType> = spec
                    .required_rooms
                    .iter()
                    .filter_map(|label| RoomType::from_label(label))
                    .collect();
                let same_rooms =
                    RoomSet::from_rooms(&rooms) == RoomSet::from_rooms(preset.required_rooms);
                let same_fields = preset.min_rooms == spec.min_rooms
                    && preset.max_room_size == spec.max_room_size
                    && preset.default_dimensions == Some((spec.width, spec.height));
                (
                    same_rooms && same_fields,
                    "matches built-in catalog".to_string(),
                )
            }
            None => (false, "not in built-in catalog".to_string()),
        };
        results.push(TestResult {
            name: format!("manifest_{}_agrees", spec.name),
            passed: agrees,
            detail,
        });
    }

    results
}

// ── 3. Preset application ───────────────────────────────────────────────

fn validate_preset_application(verbose: bool) -> Vec<TestResult> {
    println!("--- Preset Application ---");
    let mut results = Vec::new();

    for preset in presets() {
        let mut form = FormState::default();
        apply_preset(preset.name, &mut form);

        if verbose {
            println!(
                "  {:<14} -> rnum={} mrsize={} rf={:#b}",
                preset.name,
                form.room_count,
                form.max_room_size,
                form.enabled_rooms.bits()
            );
        }

        results.push(TestResult {
            name: format!("apply_{}_fields", preset.name),
            passed: form.room_count == preset.min_rooms
                && form.max_room_size == preset.max_room_size
                && preset
                    .default_dimensions
                    .map_or(true, |(w, h)| form.width == w && form.height == h),
            detail: format!("rnum={} mrsize={}", form.room_count, form.max_room_size),
        });

        results.push(TestResult {
            name: format!("apply_{}_rooms_exact", preset.name),
            passed: form.enabled_rooms == RoomSet::from_rooms(preset.required_rooms),
            detail: format!("rf={:#b}", form.enabled_rooms.bits()),
        });

        let mut again = form.clone();
        apply_preset(preset.name, &mut again);
        results.push(TestResult {
            name: format!("apply_{}_idempotent", preset.name),
            passed: again == form,
            detail: "second application changes nothing".into(),
        });

        // A user with a larger room count keeps it.
        let mut roomy = FormState {
            room_count: preset.min_rooms + 7,
            ..FormState::default()
        };
        apply_preset(preset.name, &mut roomy);
        results.push(TestResult {
            name: format!("apply_{}_keeps_floor", preset.name),
            passed: roomy.room_count == preset.min_rooms + 7,
            detail: format!("kept user count {}", roomy.room_count),
        });
    }

    // Switching presets resets the previous selection wholesale.
    let mut form = FormState::default();
    apply_preset("Stronghold", &mut form);
    apply_preset("Trick-Or-Treat", &mut form);
    results.push(TestResult {
        name: "apply_switch_resets".into(),
        passed: form.enabled_rooms == RoomSet::from_rooms(&[RoomType::Treasure, RoomType::Trap]),
        detail: format!("rf={:#b} after Stronghold -> Trick-Or-Treat", form.enabled_rooms.bits()),
    });

    // Unknown preset leaves the form untouched.
    let mut form = FormState::default();
    apply_preset("Catacombs", &mut form);
    results.push(TestResult {
        name: "apply_unknown_noop".into(),
        passed: form == FormState::default(),
        detail: "unknown preset name is a no-op".into(),
    });

    results
}

// ── 4. Route encoding ───────────────────────────────────────────────────

fn validate_route_encoding(verbose: bool) -> Vec<TestResult> {
    println!("--- Route Encoding ---");
    let mut results = Vec::new();

    // The documented concrete scenario: bits 0 and 2 -> rf=5.
    let form = FormState {
        width: 20,
        height: 15,
        room_count: 0,
        max_room_size: 8,
        enabled_rooms: RoomSet::from_rooms(&[RoomType::Prison, RoomType::Trap]),
    };
    let request = RequestDescriptor::encode(&form);
    let route = request.route();
    if verbose {
        println!("  {}", route);
    }
    results.push(TestResult {
        name: "encode_concrete_scenario".into(),
        passed: route == format!("/maze/20/15/{}/rf=5;rnum=0;mrsize=8", request.seed),
        detail: route.clone(),
    });

    let blank = RequestDescriptor::encode(&FormState::default());
    results.push(TestResult {
        name: "encode_blank_form".into(),
        passed: blank.route() == format!("/maze/0/0/{}/rf=0;rnum=0;mrsize=0", blank.seed),
        detail: "empty fields encode as zero".into(),
    });

    let seeds: std::collections::HashSet<u32> =
        (0..8).map(|_| RequestDescriptor::encode(&form).seed).collect();
    results.push(TestResult {
        name: "encode_fresh_seeds".into(),
        passed: seeds.len() > 1,
        detail: format!("{} distinct seeds across 8 encodes", seeds.len()),
    });

    let mask_limit = 1u32 << RoomType::all().len();
    let all_masks_bounded = presets().iter().all(|preset| {
        let mut form = FormState::default();
        apply_preset(preset.name, &mut form);
        RequestDescriptor::encode(&form).room_filter.bits() < mask_limit
    });
    results.push(TestResult {
        name: "encode_masks_bounded".into(),
        passed: all_masks_bounded,
        detail: format!("all preset masks < {}", mask_limit),
    });

    results
}

// ── 5. Route decoding ───────────────────────────────────────────────────

fn validate_route_decoding(verbose: bool) -> Vec<TestResult> {
    println!("--- Route Decoding ---");
    let mut results = Vec::new();

    let args = RouteArgs::parse(RouteArgs::DEFAULT_ARGS);
    results.push(TestResult {
        name: "decode_default_args".into(),
        passed: args == RouteArgs::default(),
        detail: format!("{:?}", args),
    });

    let tolerant = RouteArgs::parse("rf=5;template=corridor;bogus;rnum=oops");
    results.push(TestResult {
        name: "decode_tolerates_noise".into(),
        passed: tolerant.room_filter == 5
            && tolerant.room_count == 8
            && tolerant.max_room_size == 8,
        detail: "unknown keys and malformed pairs skipped".into(),
    });

    let missing = RequestDescriptor::parse_route("/maze/30/30/12345");
    results.push(TestResult {
        name: "decode_missing_args_segment".into(),
        passed: missing.map_or(false, |r| r.room_count == 8 && r.max_room_size == 8),
        detail: "service defaults fill in".into(),
    });

    let rejects = ["", "/maze/20/15", "/dungeon/1/2/3/rf=0", "/maze/a/b/c/rf=0"];
    results.push(TestResult {
        name: "decode_rejects_bad_shapes".into(),
        passed: rejects.iter().all(|r| RequestDescriptor::parse_route(r).is_none()),
        detail: format!("{} malformed routes rejected", rejects.len()),
    });

    let mut rng = rand::thread_rng();
    let mut roundtrips = 0;
    for _ in 0..100 {
        let request = random_request(&mut rng);
        let route = request.route();
        if RequestDescriptor::parse_route(&route) == Some(request) {
            roundtrips += 1;
        } else if verbose {
            println!("  round-trip failed: {}", route);
        }
    }
    results.push(TestResult {
        name: "decode_roundtrip".into(),
        passed: roundtrips == 100,
        detail: format!("{}/100 routes round-tripped", roundtrips),
    });

    results
}

// ── 6. Randomized requests ──────────────────────────────────────────────

fn validate_randomized_requests(verbose: bool) -> Vec<TestResult> {
    println!("--- Randomized Requests ---");
    let mut results = Vec::new();

    let mut rng = rand::thread_rng();
    let mut dims_ok = true;
    let mut sizes_ok = true;
    let mut masks_ok = true;
    for i in 0..200 {
        let request = random_request(&mut rng);
        if verbose && i < 3 {
            println!("  {}", request.route());
        }
        dims_ok &= (10..=150).contains(&request.width) && (10..=150).contains(&request.height);
        let min_side = f64::from(request.width.min(request.height));
        let low = (min_side / 4.0).sqrt().round() as u32;
        let high = (min_side * 4.0).sqrt().round() as u32;
        sizes_ok &= (low..=high).contains(&request.max_room_size);
        masks_ok &= request.room_filter == RoomSet::from_bits(request.room_filter.bits());
    }

    results.push(TestResult {
        name: "random_dimensions_in_range".into(),
        passed: dims_ok,
        detail: "200 draws within [10, 150]".into(),
    });
    results.push(TestResult {
        name: "random_room_size_scaled".into(),
        passed: sizes_ok,
        detail: "room size tracks sqrt of shorter side".into(),
    });
    results.push(TestResult {
        name: "random_masks_known_bits".into(),
        passed: masks_ok,
        detail: "filter bits limited to known room types".into(),
    });

    results
}
