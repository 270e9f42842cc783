use tintmosaic::exec::Executor;
use tintmosaic::{mean_color, project, project_in_place, MeanColors, Raster};

fn make_raster(width: usize, height: usize) -> Raster {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 37) ^ (y * 11)) as u8);
            data.push(((x * 5 + y * 17) & 0xFF) as u8);
            data.push(((x * y * 3) & 0xFF) as u8);
        }
    }
    Raster::new(data, width, height).unwrap()
}

fn assert_close(a: [f64; 3], b: [f64; 3]) {
    for c in 0..3 {
        assert!((a[c] - b[c]).abs() < 1e-9, "{a:?} != {b:?}");
    }
}

#[test]
fn mean_color_averages_each_channel() {
    let raster = Raster::new(vec![0, 10, 255, 100, 20, 0], 2, 1).unwrap();
    assert_close(mean_color(&raster), [50.0, 15.0, 127.5]);
}

#[test]
fn mean_color_is_permutation_invariant() {
    let raster = make_raster(7, 5);
    let mut pixels: Vec<[u8; 3]> = raster.pixels().collect();
    pixels.reverse();
    pixels.rotate_left(3);
    let shuffled: Vec<u8> = pixels.into_iter().flatten().collect();
    // Reinterpreting the pixel list with swapped dimensions permutes rows and columns.
    let permuted = Raster::new(shuffled, 5, 7).unwrap();
    assert_close(mean_color(&raster), mean_color(&permuted));
}

#[test]
fn mean_colors_cache_is_aligned_with_input() {
    let rasters: Vec<Raster> = (0..5u8)
        .map(|v| Raster::new(vec![v, v * 2, v * 3], 1, 1).unwrap())
        .collect();
    let cache = MeanColors::compute(&rasters, Executor::Sequential).unwrap();
    assert_eq!(cache.len(), 5);
    for (i, raster) in rasters.iter().enumerate() {
        assert_eq!(cache.get(i), Some(mean_color(raster)));
    }
    assert!(cache.get(5).is_none());
    assert_eq!(MeanColors::from_vec(cache.as_slice().to_vec()), cache);
}

#[test]
fn project_with_white_is_identity() {
    let raster = make_raster(6, 4);
    assert_eq!(project(&raster, [255.0, 255.0, 255.0]), raster);
}

#[test]
fn project_with_black_zeroes_everything() {
    let raster = make_raster(6, 4);
    let out = project(&raster, [0.0, 0.0, 0.0]);
    assert_eq!(out.size(), raster.size());
    assert!(out.data().iter().all(|&v| v == 0));
}

#[test]
fn project_scales_channels_independently() {
    let raster = Raster::new(vec![200, 200, 200], 1, 1).unwrap();
    let out = project(&raster, [255.0, 51.0, 0.0]);
    assert_eq!(out.data(), &[200, 40, 0]);
}

#[test]
fn project_amplifies_and_saturates() {
    let raster = Raster::new(vec![100, 200, 10], 1, 1).unwrap();
    let out = project(&raster, [510.0, 510.0, 510.0]);
    assert_eq!(out.data(), &[200, 255, 20]);
}

#[test]
fn project_leaves_input_untouched() {
    let raster = make_raster(3, 3);
    let copy = raster.clone();
    let _ = project(&raster, [10.0, 20.0, 30.0]);
    assert_eq!(raster, copy);
}

#[test]
fn project_in_place_matches_project() {
    let raster = make_raster(4, 4);
    let color = [12.0, 180.0, 99.0];
    let mut in_place = raster.clone();
    project_in_place(&mut in_place, color);
    assert_eq!(in_place, project(&raster, color));
}
