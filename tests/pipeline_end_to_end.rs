use tintmosaic::{
    build_mosaic, ErrorKind, MosaicConfig, MosaicError, RankWindow, Raster, Size, Strategy,
};

fn solid(width: usize, height: usize, color: [u8; 3]) -> Raster {
    Raster::filled(Size::new(width, height).unwrap(), color).unwrap()
}

fn gradient(width: usize, height: usize) -> Raster {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / width.max(1)) as u8);
            data.push((y * 255 / height.max(1)) as u8);
            data.push(((x + y) * 7) as u8);
        }
    }
    Raster::new(data, width, height).unwrap()
}

fn config(strategy: Strategy, grid: (usize, usize), tile: (usize, usize)) -> MosaicConfig {
    MosaicConfig {
        strategy,
        image_size: Size::new(grid.0, grid.1).unwrap(),
        tile_size: Size::new(tile.0, tile.1).unwrap(),
        seed: Some(11),
        ..MosaicConfig::default()
    }
}

#[test]
fn output_size_is_grid_times_tile() {
    let target = gradient(37, 23);
    let fillers: Vec<Raster> = (0..5).map(|i| gradient(10 + i, 8 + 2 * i)).collect();
    let cfg = config(Strategy::PixelMean, (6, 4), (3, 2));

    let out = build_mosaic(&target, &fillers, &cfg).unwrap();
    assert_eq!(out.size(), cfg.output_size());
    assert_eq!(out.width(), 18);
    assert_eq!(out.height(), 8);
}

#[test]
fn pixel_mean_tints_the_nearest_filler() {
    let target = solid(16, 16, [128, 128, 128]);
    let fillers = vec![
        solid(5, 5, [10, 10, 10]),
        solid(7, 3, [120, 120, 120]),
        solid(4, 9, [250, 250, 250]),
    ];
    let cfg = config(Strategy::PixelMean, (3, 2), (2, 2));

    let out = build_mosaic(&target, &fillers, &cfg).unwrap();
    // 120 * 128 / 255 truncates to 60.
    assert!(out.pixels().all(|px| px == [60, 60, 60]));
}

#[test]
fn duplication_places_fillers_in_raster_scan_order() {
    let target = solid(10, 10, [255, 255, 255]);
    let fillers = vec![
        solid(3, 3, [255, 0, 0]),
        solid(3, 3, [0, 255, 0]),
        solid(3, 3, [0, 0, 255]),
    ];
    let cfg = config(Strategy::Duplication, (2, 2), (3, 3));

    let out = build_mosaic(&target, &fillers, &cfg).unwrap();
    assert_eq!(out.size(), Size::new(6, 6).unwrap());
    assert_eq!(out.get(0, 0), Some([255, 0, 0]));
    assert_eq!(out.get(3, 0), Some([0, 255, 0]));
    assert_eq!(out.get(0, 3), Some([0, 0, 255]));
    assert_eq!(out.get(5, 5), Some([255, 0, 0]));
}

#[test]
fn straight_requires_one_filler_per_cell() {
    let target = solid(8, 8, [200, 200, 200]);
    let fillers: Vec<Raster> = (0..6).map(|i| solid(2, 2, [i * 40, 0, 0])).collect();

    let ok = build_mosaic(&target, &fillers, &config(Strategy::Straight, (3, 2), (2, 2)));
    assert!(ok.is_ok());

    let err = build_mosaic(&target, &fillers, &config(Strategy::Straight, (2, 2), (2, 2)))
        .err()
        .unwrap();
    assert_eq!(
        err,
        MosaicError::PoolSizeMismatch {
            strategy: "straight",
            expected: 4,
            got: 6,
        }
    );
}

#[test]
fn seeded_random_runs_are_reproducible() {
    let target = gradient(20, 20);
    let fillers: Vec<Raster> = (0..25).map(|i| gradient(4 + i % 3, 4 + i % 5)).collect();
    let cfg = config(
        Strategy::PixelMeanRandom(RankWindow::Fixed(4)),
        (5, 5),
        (2, 2),
    );

    let a = build_mosaic(&target, &fillers, &cfg).unwrap();
    let b = build_mosaic(&target, &fillers, &cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn large_pools_take_the_parallel_path() {
    let target = gradient(12, 9);
    let fillers: Vec<Raster> = (0..130).map(|i| gradient(3 + i % 4, 3 + i % 6)).collect();
    let mut cfg = config(Strategy::PixelMean, (4, 3), (2, 2));

    let parallel = build_mosaic(&target, &fillers, &cfg).unwrap();
    cfg.parallel_threshold = usize::MAX;
    let sequential = build_mosaic(&target, &fillers, &cfg).unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn empty_filler_pool_is_rejected() {
    let target = gradient(4, 4);
    let err = build_mosaic(&target, &[], &config(Strategy::PixelMean, (2, 2), (2, 2)))
        .err()
        .unwrap();
    assert_eq!(err, MosaicError::EmptyPool);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn zero_grid_size_is_rejected() {
    let target = gradient(4, 4);
    let fillers = vec![solid(2, 2, [1, 2, 3])];
    let mut cfg = config(Strategy::PixelMean, (2, 2), (2, 2));
    cfg.image_size = Size {
        width: 0,
        height: 2,
    };
    let err = build_mosaic(&target, &fillers, &cfg).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
