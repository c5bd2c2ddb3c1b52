pub mod bone;
pub mod convert;
pub mod error;
pub mod face;
pub mod material;
pub mod mesh;
pub mod node;
pub mod post_process_steps;
pub mod scene;
pub mod texture_type;
pub mod vertex_weight;

fn get_assimp_error() -> crate::error::AssimpError {
    unsafe {
        let error_buf = russimp_sys::aiGetErrorString();
        let error = if error_buf.is_null() {
            String::new()
        } else {
            std::ffi::CStr::from_ptr(error_buf)
                .to_string_lossy()
                .to_string()
        };
        crate::error::AssimpError::Import(error)
    }
}

/// Null or empty arrays read as an empty slice.
pub(crate) unsafe fn raw_slice<'a, T>(data: *const T, len: u32) -> &'a [T] {
    if data.is_null() || len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(data, len as usize)
    }
}

/// Arrays of pointers skip their null entries.
pub(crate) unsafe fn raw_ptr_slice<'a, T>(data: *const *mut T, len: u32) -> Vec<&'a T> {
    raw_slice(data, len)
        .iter()
        .filter_map(|item| item.as_ref())
        .collect()
}
