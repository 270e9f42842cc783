#![cfg(feature = "rayon")]

use tintmosaic::exec::Executor;
use tintmosaic::{normalize, normalize_with, FillerPool, MeanColors, Raster, Size};

fn make_pool(count: usize) -> Vec<Raster> {
    (0..count)
        .map(|i| {
            let width = 3 + i % 7;
            let height = 2 + i % 5;
            let data = (0..width * height * 3)
                .map(|p| ((p * 13) ^ (i * 29)) as u8)
                .collect();
            Raster::new(data, width, height).unwrap()
        })
        .collect()
}

#[test]
fn parallel_normalize_matches_sequential() {
    let pool = make_pool(150);
    let tile = Size::new(4, 4).unwrap();

    let seq = normalize_with(&pool, tile, Executor::Sequential).unwrap();
    let par = normalize_with(&pool, tile, Executor::Parallel).unwrap();

    assert_eq!(seq.len(), pool.len());
    assert_eq!(par.len(), pool.len());
    assert_eq!(seq, par);
    assert!(par.iter().all(|r| r.size() == tile));
}

#[test]
fn threshold_dispatch_does_not_change_output() {
    let pool = make_pool(120);
    let tile = Size::new(3, 5).unwrap();

    let forced_parallel = normalize(&pool, tile, 10).unwrap();
    let forced_sequential = normalize(&pool, tile, 1_000).unwrap();
    assert_eq!(forced_parallel, forced_sequential);
}

#[test]
fn parallel_mean_colors_match_sequential() {
    let pool = make_pool(200);
    let seq = MeanColors::compute(&pool, Executor::Sequential).unwrap();
    let par = MeanColors::compute(&pool, Executor::Parallel).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn pool_build_is_independent_of_threshold() {
    let pool = make_pool(130);
    let tile = Size::new(2, 2).unwrap();
    let small = FillerPool::build(&pool, tile, 0).unwrap();
    let large = FillerPool::build(&pool, tile, 500).unwrap();
    assert_eq!(small.tiles(), large.tiles());
    assert_eq!(small.means(), large.means());
}
