use types::Rgba;

/// Food pellets.
pub const FOOD: Rgba = Rgba::rgb(0, 221, 255);

/// Agent body triangle.
pub const BODY: Rgba = Rgba::rgb(255, 255, 255);

/// Faint orientation reference line.
pub const ORIENTATION: Rgba = Rgba::rgba(150, 150, 150, 0.08);

/// Neutral dark fill for a cell whose energy is exactly zero, so "nothing
/// sensed" stays visually distinct from "something weakly sensed".
pub const ZERO_ENERGY: Rgba = Rgba::rgba(0, 0, 0, 0.08);

/// Radius strokes separating adjacent sectors.
pub const SECTOR_EDGE: Rgba = Rgba::rgba(0, 221, 255, 0.02);

/// Fraction of a cell's energy used as sector fill opacity.
pub const FILL_ALPHA_SCALE: f32 = 0.4;

/// Deterministic per-cell flair color. Same (agent, cell) pair always maps
/// to the same hue, so frames are reproducible across runs and no cache is
/// needed.
pub fn cell_color(agent_idx: usize, cell_idx: usize) -> Rgba {
    let mut h = ((agent_idx as u64) << 32) ^ cell_idx as u64;
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    let hue = (h % 360) as f32;
    let (r, g, b) = hsl_to_rgb(hue, 0.85, 0.6);
    Rgba::rgb(r, g, b)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
