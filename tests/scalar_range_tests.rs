mod common;

use common::PointCloud;
use mesh_dataset::prelude::*;

fn dataset(points: usize, cells: usize) -> Dataset<PointCloud> {
    Dataset::new(PointCloud::with_cells(vec![[0.0; 3]; points], cells))
}

#[test]
fn no_scalars_yields_default_range() {
    let mut ds = dataset(3, 2);
    assert_eq!(ds.scalar_range(), (0.0, 1.0));
}

#[test]
fn point_scalars_only() {
    let mut ds = dataset(3, 0);
    ds.point_data_mut()
        .add_array(DataArray::float64("s", 1, vec![2.0, 8.0, 5.0]).unwrap());
    ds.point_data_mut().set_active_scalars("s").unwrap();
    assert_eq!(ds.scalar_range(), (2.0, 8.0));
}

#[test]
fn cell_scalars_only() {
    let mut ds = dataset(0, 2);
    ds.cell_data_mut()
        .add_array(DataArray::float64("c", 1, vec![0.0, 5.0]).unwrap());
    ds.cell_data_mut().set_active_scalars("c").unwrap();
    assert_eq!(ds.scalar_range(), (0.0, 5.0));
}

#[test]
fn point_and_cell_scalars_merge_by_envelope() {
    let mut ds = dataset(2, 2);
    ds.point_data_mut()
        .add_array(DataArray::float64("s", 1, vec![2.0, 8.0]).unwrap());
    ds.point_data_mut().set_active_scalars("s").unwrap();
    ds.cell_data_mut()
        .add_array(DataArray::float64("c", 1, vec![0.0, 5.0]).unwrap());
    ds.cell_data_mut().set_active_scalars("c").unwrap();
    assert_eq!(ds.scalar_range(), (0.0, 8.0));
}

#[test]
fn ghost_masked_values_are_excluded() {
    let mut ds = dataset(3, 0);
    ds.point_data_mut()
        .add_array(DataArray::float64("s", 1, vec![100.0, 2.0, 8.0]).unwrap());
    ds.point_data_mut().set_active_scalars("s").unwrap();
    ds.point_data_mut()
        .add_array(DataArray::uint8(GHOST_ARRAY_NAME, 1, vec![DUPLICATE_POINT, 0, 0]).unwrap());
    ds.point_data_mut().set_ghosts_to_skip(DUPLICATE_POINT);
    assert_eq!(ds.scalar_range(), (2.0, 8.0));

    // With a skip mask that intersects nothing, the ghost value is back in.
    ds.point_data_mut().set_ghosts_to_skip(0x02);
    assert_eq!(ds.scalar_range(), (2.0, 100.0));
}

#[test]
fn fully_masked_table_falls_back_to_the_other() {
    let mut ds = dataset(2, 2);
    ds.point_data_mut()
        .add_array(DataArray::float64("s", 1, vec![-9.0, 9.0]).unwrap());
    ds.point_data_mut().set_active_scalars("s").unwrap();
    ds.point_data_mut()
        .add_array(DataArray::uint8(GHOST_ARRAY_NAME, 1, vec![1, 1]).unwrap());
    ds.point_data_mut().set_ghosts_to_skip(1);
    ds.cell_data_mut()
        .add_array(DataArray::float64("c", 1, vec![0.0, 5.0]).unwrap());
    ds.cell_data_mut().set_active_scalars("c").unwrap();
    assert_eq!(ds.scalar_range(), (0.0, 5.0));
}

#[test]
fn range_recomputes_when_designation_changes() {
    let mut ds = dataset(2, 0);
    ds.point_data_mut()
        .add_array(DataArray::float64("a", 1, vec![2.0, 8.0]).unwrap());
    ds.point_data_mut()
        .add_array(DataArray::float64("b", 1, vec![-1.0, 1.0]).unwrap());
    ds.point_data_mut().set_active_scalars("a").unwrap();
    assert_eq!(ds.scalar_range(), (2.0, 8.0));
    ds.point_data_mut().set_active_scalars("b").unwrap();
    assert_eq!(ds.scalar_range(), (-1.0, 1.0));
}

#[test]
fn independent_stamps_for_bounds_and_range() {
    let mut ds = Dataset::new(PointCloud::new(vec![[1.0, 0.0, 0.0]]));
    ds.point_data_mut()
        .add_array(DataArray::float64("s", 1, vec![4.0]).unwrap());
    ds.point_data_mut().set_active_scalars("s").unwrap();
    // Reading one cache does not disturb the other.
    assert_eq!(ds.scalar_range(), (4.0, 4.0));
    assert_eq!(
        ds.bounds(),
        Bounds::Valid {
            min: [1.0, 0.0, 0.0],
            max: [1.0, 0.0, 0.0],
        }
    );
    assert_eq!(ds.scalar_range(), (4.0, 4.0));
}
