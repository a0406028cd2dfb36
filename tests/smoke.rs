use anyhow::Result;
use candle_core::Device;
use hellocandleframe::Frame;

#[test]
fn frame_shapes_and_values() -> Result<()> {
    let device = Device::Cpu;
    let frame = Frame::from_columns(&[("A", &[1, 2, 3]), ("B", &[4, 5, 6])], &device)?;
    assert_eq!(frame.num_rows(), 3);
    assert_eq!(frame.num_columns(), 2);

    let a = frame.column("A").unwrap().to_vec1::<i64>()?;
    assert_eq!(a, vec![1, 2, 3]);
    let b = frame.column("B").unwrap().to_vec1::<i64>()?;
    assert_eq!(b, vec![4, 5, 6]);
    assert!(frame.column("C").is_none());
    Ok(())
}

#[test]
fn ragged_columns_rejected() -> Result<()> {
    let device = Device::Cpu;
    let res = Frame::from_columns(&[("A", &[1, 2, 3]), ("B", &[4, 5])], &device);
    assert!(res.is_err(), "ragged columns must fail construction");
    Ok(())
}

#[test]
fn duplicate_names_rejected() -> Result<()> {
    let device = Device::Cpu;
    let res = Frame::from_columns(&[("A", &[1]), ("A", &[2])], &device);
    assert!(res.is_err(), "duplicate column names must fail construction");
    Ok(())
}

#[test]
fn empty_names_rejected() -> Result<()> {
    let device = Device::Cpu;
    let res = Frame::from_columns(&[("", &[1])], &device);
    assert!(res.is_err(), "empty column name must fail construction");
    Ok(())
}
