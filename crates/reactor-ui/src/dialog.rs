// crates/reactor-ui/src/dialog.rs
//
// Native file pickers. rfd does not report which filter the user had active,
// so the filter is recovered from the extensions of the returned paths.

use rfd::FileDialog;

use reactor_core::state::{DialogResult, FileFilter};

pub fn pick_faces() -> DialogResult {
    pick("Select face image", &[FileFilter::Images])
}

pub fn pick_targets() -> DialogResult {
    pick("Select target", &[FileFilter::Images, FileFilter::Videos])
}

fn pick(title: &str, offered: &[FileFilter]) -> DialogResult {
    let dialog = offered.iter().fold(
        FileDialog::new().set_title(title),
        |d, f| d.add_filter(f.label(), f.extensions()),
    );
    match dialog.pick_files() {
        Some(paths) => {
            let filter = FileFilter::matching(offered, &paths);
            crate::reactor_log!("[dialog] {title}: {} file(s), filter {filter:?}", paths.len());
            DialogResult::new(paths, filter)
        }
        None => DialogResult::cancelled(),
    }
}
