use image::RgbaImage;
use lab::Lab;

use super::lab::delta_e_sq;

/// Side of the square sampled at each corner.
const CORNER_WINDOW: u32 = 5;
/// Corner pixels more transparent than this do not vote.
const MIN_VOTE_ALPHA: u8 = 8;
/// Max ΔE for a sample to join an existing cluster.
const MERGE_DISTANCE: f32 = 8.0;

/// Weighted running mean of nearby LAB samples.
#[derive(Clone, Copy)]
struct Cluster {
    sum: [f32; 3],
    weight: f32,
}

impl Cluster {
    #[inline]
    fn new(lab: Lab, weight: f32) -> Self {
        Self {
            sum: [lab.l * weight, lab.a * weight, lab.b * weight],
            weight,
        }
    }

    #[inline]
    fn push(&mut self, lab: Lab, weight: f32) {
        self.sum[0] += lab.l * weight;
        self.sum[1] += lab.a * weight;
        self.sum[2] += lab.b * weight;
        self.weight += weight;
    }

    #[inline]
    fn mean(&self) -> Lab {
        let n = self.weight.max(f32::EPSILON);
        Lab {
            l: self.sum[0] / n,
            a: self.sum[1] / n,
            b: self.sum[2] / n,
        }
    }
}

/// Guess the background color from the four corner windows.
///
/// Samples are grouped into ΔE clusters weighted by alpha; the heaviest
/// cluster wins. Returns `None` when no corner pixel is opaque enough to vote,
/// which means the image has no backdrop left to remove.
pub(super) fn detect_background(img: &RgbaImage) -> Option<Lab> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let mut clusters: Vec<Cluster> = Vec::with_capacity(8);
    for (x, y) in corner_samples(width, height) {
        let px = img.get_pixel(x, y);
        if px[3] < MIN_VOTE_ALPHA {
            continue;
        }
        let lab = Lab::from_rgb(&[px[0], px[1], px[2]]);
        let weight = (f32::from(px[3]) / 255.0).max(0.1);
        vote(&mut clusters, lab, weight);
    }

    clusters
        .iter()
        .max_by(|a, b| a.weight.total_cmp(&b.weight))
        .map(Cluster::mean)
}

/// Coordinates of every pixel in the four corner windows, clamped to the image.
fn corner_samples(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let right = width.saturating_sub(CORNER_WINDOW);
    let bottom = height.saturating_sub(CORNER_WINDOW);
    [(0, 0), (right, 0), (0, bottom), (right, bottom)]
        .into_iter()
        .flat_map(move |(cx, cy)| {
            (0..CORNER_WINDOW).flat_map(move |dy| {
                (0..CORNER_WINDOW).map(move |dx| ((cx + dx).min(width - 1), (cy + dy).min(height - 1)))
            })
        })
}

fn vote(clusters: &mut Vec<Cluster>, lab: Lab, weight: f32) {
    let nearest = clusters
        .iter()
        .enumerate()
        .map(|(idx, cluster)| (idx, delta_e_sq(&cluster.mean(), &lab)))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match nearest {
        Some((idx, dist_sq)) if dist_sq <= MERGE_DISTANCE * MERGE_DISTANCE => {
            clusters[idx].push(lab, weight);
        }
        _ => clusters.push(Cluster::new(lab, weight)),
    }
}
