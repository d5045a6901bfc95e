pub mod backend;
pub mod gpu_context;
pub mod presenter;

pub use backend::DesktopBackend;
pub use gpu_context::GpuContext;
pub use presenter::GpuPresenter;
