use tintmosaic::{ErrorKind, MosaicError, Raster, Size};

#[test]
fn raster_rejects_invalid_dimensions() {
    let err = Raster::new(vec![], 0, 1).err().unwrap();
    assert_eq!(
        err,
        MosaicError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = Raster::new(vec![], 1, 0).err().unwrap();
    assert_eq!(
        err,
        MosaicError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn raster_rejects_mismatched_buffer() {
    let err = Raster::new(vec![0u8; 11], 2, 2).err().unwrap();
    assert_eq!(err, MosaicError::BufferSizeMismatch { needed: 12, got: 11 });

    let err = Raster::new(vec![0u8; 13], 2, 2).err().unwrap();
    assert_eq!(err, MosaicError::BufferSizeMismatch { needed: 12, got: 13 });
}

#[test]
fn raster_accessors_follow_row_major_layout() {
    let data: Vec<u8> = (0u8..18).collect();
    let raster = Raster::new(data.clone(), 3, 2).unwrap();
    assert_eq!(raster.width(), 3);
    assert_eq!(raster.height(), 2);
    assert_eq!(raster.size(), Size::new(3, 2).unwrap());
    assert_eq!(raster.data(), data.as_slice());

    assert_eq!(raster.get(0, 0), Some([0, 1, 2]));
    assert_eq!(raster.get(2, 0), Some([6, 7, 8]));
    assert_eq!(raster.get(1, 1), Some([12, 13, 14]));
    assert!(raster.get(3, 0).is_none());
    assert!(raster.get(0, 2).is_none());

    assert_eq!(raster.row(1).unwrap(), &data[9..18]);
    assert!(raster.row(2).is_none());
    assert_eq!(raster.pixels().count(), 6);
    assert!(raster.validate().is_ok());
}

#[test]
fn filled_raster_repeats_color() {
    let raster = Raster::filled(Size::new(4, 3).unwrap(), [1, 2, 3]).unwrap();
    assert_eq!(raster.data().len(), 36);
    assert!(raster.pixels().all(|px| px == [1, 2, 3]));
}

#[test]
fn size_rejects_zero_extent() {
    assert_eq!(
        Size::new(0, 5).err().unwrap(),
        MosaicError::InvalidDimensions {
            width: 0,
            height: 5,
        }
    );
    assert_eq!(Size::new(4, 5).unwrap().area(), 20);
}
