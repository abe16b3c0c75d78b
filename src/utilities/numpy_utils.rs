use ndarray::{Array2, Axis};
use numpy::{PyReadonlyArray1, PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::prelude::*;

fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .map(|s| s.to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

#[allow(clippy::collapsible_if)]
pub fn extract_vec_f64(obj: &Bound<'_, PyAny>) -> PyResult<Vec<f64>> {
    if let Ok(arr) = obj.extract::<PyReadonlyArray1<'_, f64>>() {
        return Ok(arr.as_array().to_vec());
    }
    if let Ok(list) = obj.extract::<Vec<f64>>() {
        return Ok(list);
    }
    if let Ok(to_numpy) = obj.getattr("to_numpy") {
        if let Ok(arr_obj) = to_numpy.call0() {
            if let Ok(arr) = arr_obj.extract::<PyReadonlyArray1<'_, f64>>() {
                return Ok(arr.as_array().to_vec());
            }
        }
    }
    Err(PyErr::new::<pyo3::exceptions::PyTypeError, _>(format!(
        "Cannot convert '{}' to float array. Expected: numpy array, pandas Series, or list of floats.",
        type_name(obj)
    )))
}

pub fn extract_optional_vec_f64(obj: Option<&Bound<'_, PyAny>>) -> PyResult<Option<Vec<f64>>> {
    match obj {
        Some(o) => Ok(Some(extract_vec_f64(o)?)),
        None => Ok(None),
    }
}

/// Event indicators must already be boolean; integer 0/1 columns are rejected
/// so that a mislabelled status column is not silently reinterpreted.
#[allow(clippy::collapsible_if)]
pub fn extract_vec_bool(obj: &Bound<'_, PyAny>) -> PyResult<Vec<bool>> {
    if let Ok(arr) = obj.extract::<PyReadonlyArray1<'_, bool>>() {
        return Ok(arr.as_array().to_vec());
    }
    if let Ok(list) = obj.extract::<Vec<bool>>() {
        return Ok(list);
    }
    if let Ok(to_numpy) = obj.getattr("to_numpy") {
        if let Ok(arr_obj) = to_numpy.call0() {
            if let Ok(arr) = arr_obj.extract::<PyReadonlyArray1<'_, bool>>() {
                return Ok(arr.as_array().to_vec());
            }
        }
    }
    Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
        "only boolean arrays are supported as event indicators for survival analysis, got '{}'",
        type_name(obj)
    )))
}

/// Reads a 2-D float matrix. A 1-D input becomes a single column and integer
/// arrays (for example an `int64` status column) are widened to `f64`.
pub fn extract_2d_array_f64(obj: &Bound<'_, PyAny>) -> PyResult<Array2<f64>> {
    if let Ok(arr) = obj.extract::<PyReadonlyArray2<'_, f64>>() {
        return Ok(arr.as_array().to_owned());
    }
    if let Ok(arr) = obj.extract::<PyReadonlyArray2<'_, i64>>() {
        return Ok(arr.as_array().mapv(|x| x as f64));
    }
    if let Ok(arr) = obj.extract::<PyReadonlyArray2<'_, i32>>() {
        return Ok(arr.as_array().mapv(f64::from));
    }
    if let Ok(arr) = obj.extract::<PyReadonlyArray1<'_, f64>>() {
        return Ok(arr.as_array().insert_axis(Axis(1)).to_owned());
    }
    if let Ok(arr) = obj.extract::<PyReadonlyArray1<'_, i64>>() {
        return Ok(arr.as_array().mapv(|x| x as f64).insert_axis(Axis(1)));
    }
    if let Ok(arr) = obj.extract::<PyReadonlyArray1<'_, i32>>() {
        return Ok(arr.as_array().mapv(f64::from).insert_axis(Axis(1)));
    }
    if let Ok(rows) = obj.extract::<Vec<Vec<f64>>>() {
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "ragged nested list: every row must have the same length",
            ));
        }
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        return Array2::from_shape_vec((flat.len() / ncols.max(1), ncols), flat)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()));
    }
    if let Ok(arr) = obj.downcast::<numpy::PyUntypedArray>() {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "expected a 1D or 2D float array, got {}D array",
            arr.ndim()
        )));
    }
    Err(PyErr::new::<pyo3::exceptions::PyTypeError, _>(format!(
        "Cannot convert '{}' to 2D float array. Expected: 2D numpy array or list of lists.",
        type_name(obj)
    )))
}
