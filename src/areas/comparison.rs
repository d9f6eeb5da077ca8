use crate::areas::report::Report;
use crate::artifacts::walk::request::CompareRequest;
use std::cell::{RefCell, RefMut};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One comparison run: the request, the report it fills and where user-facing
/// messages go.
pub struct Comparison {
    request: CompareRequest,
    report: Report,
    writer: RefCell<Box<dyn std::io::Write>>,
    cancelled: Arc<AtomicBool>,
}

impl Comparison {
    /// Creates the temporary report up front; failing to do so is fatal.
    pub fn new(request: CompareRequest, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let report = Report::create(request.caption())?;

        Ok(Comparison {
            request,
            report,
            writer: RefCell::new(writer),
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn request(&self) -> &CompareRequest {
        &self.request
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub(crate) fn parts_mut(&mut self) -> (&CompareRequest, &mut Report) {
        (&self.request, &mut self.report)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Flag that stops the walk before the next entry once set.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
