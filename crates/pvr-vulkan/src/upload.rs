//! USC code upload.
//!
//! The hard-coding path only needs "put these bytes in device memory with this
//! alignment". [`UscUploader`] is that seam; [`AllocatorUploader`] implements it
//! with gpu-allocator.

use ash::vk;
use gpu_allocator::vulkan::{Allocation, AllocationCreateDesc, AllocationScheme, Allocator};
use gpu_allocator::MemoryLocation;
use log::error;
use parking_lot::Mutex;
use pvr_rogue::DeviceInfo;
use std::sync::Arc;

/// Uploads USC programs to device memory.
pub trait UscUploader {
    /// Handle to the uploaded code.
    type Bo;

    /// Hardware description of the device being uploaded to.
    fn device_info(&self) -> &DeviceInfo;

    /// Copy `code` into a new device allocation aligned to `code_alignment`.
    fn upload_usc(&self, code: &[u8], code_alignment: u64) -> Result<Self::Bo, vk::Result>;
}

/// Uploaded USC code.
pub struct UscBo {
    pub buffer: vk::Buffer,
    pub allocation: Allocation,
    /// Allocated size, code length rounded up to the alignment.
    pub size: vk::DeviceSize,
    pub device_address: Option<vk::DeviceAddress>,
}

/// Round `size` up to a multiple of `alignment`. Alignments of 0 and 1 leave it as is.
pub fn align_up(size: u64, alignment: u64) -> u64 {
    if alignment <= 1 {
        size
    } else {
        size.div_ceil(alignment) * alignment
    }
}

/// [`UscUploader`] backed by a shared gpu-allocator instance.
pub struct AllocatorUploader {
    device: ash::Device,
    allocator: Arc<Mutex<Allocator>>,
    device_info: DeviceInfo,
    buffer_device_address: bool,
}

impl AllocatorUploader {
    pub fn new(
        device: ash::Device,
        allocator: Arc<Mutex<Allocator>>,
        device_info: DeviceInfo,
        buffer_device_address: bool,
    ) -> Self {
        Self {
            device,
            allocator,
            device_info,
            buffer_device_address,
        }
    }

    /// Release uploaded code.
    ///
    /// # Safety
    /// The buffer must not be in use by the device.
    pub unsafe fn free(&self, bo: UscBo) {
        self.discard(bo.buffer, Some(bo.allocation));
    }

    /// Destroy a partially built upload.
    unsafe fn discard(&self, buffer: vk::Buffer, allocation: Option<Allocation>) {
        if let Some(allocation) = allocation {
            if let Err(e) = self.allocator.lock().free(allocation) {
                error!("Failed to free USC allocation: {:?}", e);
            }
        }
        self.device.destroy_buffer(buffer, None);
    }
}

impl UscUploader for AllocatorUploader {
    type Bo = UscBo;

    fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    fn upload_usc(&self, code: &[u8], code_alignment: u64) -> Result<UscBo, vk::Result> {
        if code.is_empty() {
            return Err(vk::Result::ERROR_INITIALIZATION_FAILED);
        }

        let size = align_up(code.len() as u64, code_alignment);

        let mut usage = vk::BufferUsageFlags::STORAGE_BUFFER;
        if self.buffer_device_address {
            usage |= vk::BufferUsageFlags::SHADER_DEVICE_ADDRESS;
        }

        let buffer_info = vk::BufferCreateInfo::default()
            .size(size)
            .usage(usage)
            .sharing_mode(vk::SharingMode::EXCLUSIVE);

        let buffer = unsafe { self.device.create_buffer(&buffer_info, None)? };

        let mut requirements = unsafe { self.device.get_buffer_memory_requirements(buffer) };
        requirements.alignment = requirements.alignment.max(code_alignment);

        let allocation = self.allocator.lock().allocate(&AllocationCreateDesc {
            name: "usc code",
            requirements,
            location: MemoryLocation::CpuToGpu,
            linear: true,
            allocation_scheme: AllocationScheme::GpuAllocatorManaged,
        });

        let mut allocation = match allocation {
            Ok(allocation) => allocation,
            Err(e) => {
                error!("Failed to allocate USC code memory: {:?}", e);
                unsafe { self.discard(buffer, None) };
                return Err(vk::Result::ERROR_OUT_OF_DEVICE_MEMORY);
            }
        };

        let bound = unsafe {
            self.device
                .bind_buffer_memory(buffer, allocation.memory(), allocation.offset())
        };
        if let Err(result) = bound {
            unsafe { self.discard(buffer, Some(allocation)) };
            return Err(result);
        }

        match allocation.mapped_slice_mut() {
            Some(mapped) => mapped[..code.len()].copy_from_slice(code),
            None => {
                unsafe { self.discard(buffer, Some(allocation)) };
                return Err(vk::Result::ERROR_MEMORY_MAP_FAILED);
            }
        }

        let device_address = if self.buffer_device_address {
            let addr_info = vk::BufferDeviceAddressInfo::default().buffer(buffer);
            Some(unsafe { self.device.get_buffer_device_address(&addr_info) })
        } else {
            None
        };

        Ok(UscBo {
            buffer,
            allocation,
            size,
            device_address,
        })
    }
}
