#![no_std]
#![no_main]

use panic_halt as _;
use tapline::{DefaultEditor, EditDisplay, EditView, HelpKeys, Instant, Key, StrEditor};

// Minimal display - measures only struct size
pub struct MinimalDisplay;

impl EditDisplay for MinimalDisplay {
    type Error = ();

    fn editable_width(&self) -> usize {
        16
    }

    fn show(&mut self, view: &EditView<'_>) -> Result<(), Self::Error> {
        // Format through the reference renderer so it is linked in
        core::hint::black_box(view.render());
        Ok(())
    }

    fn set_help(&mut self, help: &HelpKeys) -> Result<(), Self::Error> {
        core::hint::black_box(help);
        Ok(())
    }
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let mut field = heapless::String::<32>::new();
    let mut editor: DefaultEditor<'_, 32, MinimalDisplay> =
        StrEditor::new(&mut field, MinimalDisplay);

    // Enter edit mode, tap a character, let it freeze, then commit.
    // Use black_box to prevent optimizer from removing the code
    let _ = core::hint::black_box(editor.process_key(Key::Right, Instant::from_millis(0)));
    let _ = core::hint::black_box(editor.process_key(Key::Digit(2), Instant::from_millis(10)));
    let _ = core::hint::black_box(editor.poll(Instant::from_millis(2_000)));

    #[cfg(feature = "kbd")]
    let _ = core::hint::black_box(editor.process_key(Key::kbd_char('x'), Instant::from_millis(2_010)));

    let _ = core::hint::black_box(editor.process_key(Key::Ok, Instant::from_millis(2_020)));

    // Keep editor alive to prevent optimization
    loop {
        core::hint::black_box(&editor);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
