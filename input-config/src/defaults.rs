//! The built-in default for `input_config.ini`.

use std::io::{self, Write};

/// Default key bindings, one entry per line of the generated file.
///
/// Every line is space padded to 80 columns; the padding is part of the
/// template and is written out unchanged.
pub const DEFAULT_KEYS: &[&str] = &[
    "                                                                                ",
    "; Keys are editable in 'input_config.ini'                                       ",
    "; If 'input_config.ini' is changed, then the emulator has to be restarted       ",
    "; Text cursor and editing is controlled via the mouse                           ",
    "; Left Mouse Button to compile/execute current file in Browser on Emulator      ",
    "; Right Mouse Button to compile/execute current file in Browser on Hardware     ",
    "                                                                                ",
    "[Emulator]               ; case sensitive                                       ",
    "MemoryMode   = CTRL+M    ; toggles between RAM, ROM0 and ROM1                   ",
    "MemorySize   = CTRL+Z    ; toggles between 32K RAM and 64K RAM                  ",
    "Browse       = CTRL+B    ; file browser                                         ",
    "RomType      = CTRL+R    ; ROM browser                                          ",
    "HexMonitor   = CTRL+X    ; hex monitor                                          ",
    "Disassembler = CTRL+D    ; disassembler, (vCPU or Native based on MemoryMode)   ",
    "Terminal     = CTRL+T    ; basic serial terminal for talking to hardware        ",
    "ImageEditor  = CTRL+I    ; basic image editor for editing graphic images        ",
    "AudioEditor  = CTRL+A    ; basic audio editor for editing sample waveforms      ",
    "ScanlineMode = CTRL+S    ; toggles scanline modes, Normal, VideoB and VideoBC   ",
    "Reset        = CTRL+F1   ; emulator reset                                       ",
    "Help         = CTRL+H    ; toggles help screen on and off                       ",
    "Quit         = CTRL+Q    ; instant quit                                         ",
    "                                                                                ",
    "[Keyboard]               ; case sensitive                                       ",
    "Mode         = CTRL+K    ; toggles between, Giga, PS2, HwGiga and HwPS2         ",
    "Left         = A         ; left input for emulator/hardware depending on Mode   ",
    "Right        = D         ; right input for emulator/hardware depending on Mode  ",
    "Up           = W         ; up input for emulator/hardware depending on Mode     ",
    "Down         = S         ; down input for emulator/hardware depending on Mode   ",
    "Start        = SPACE     ; start input for emulator/hardware depending on Mode  ",
    "Select       = Z         ; select input for emulator/hardware depending on Mode ",
    "A            = .         ; A input for emulator/hardware depending on Mode      ",
    "B            = /         ; B input for emulator/hardware depending on Mode      ",
    "                                                                                ",
    "[Hardware]               ; case sensitive                                       ",
    "Reset        = CTRL+F2   ; resets hardware                                      ",
    "                                                                                ",
    "[Debugger]               ; case sensitive                                       ",
    "Debug        = CTRL+F6   ; toggles debugging mode, can be used to pause         ",
    "RunToBrk     = CTRL+F7   ; run to breakpoint, does nada if no breakpoints exist ",
    "StepPC       = CTRL+F8   ; single steps debugger based on vPC or native PC      ",
    "StepWatch    = CTRL+F9   ; single steps debugger based on a watched variable    ",
    "                         ; by default is videoY which changes once per scanline ",
    "                                                                                ",
];

/// The process-wide default document.
pub static DEFAULT_DOCUMENT: DefaultConfigDocument =
    DefaultConfigDocument::new(DEFAULT_KEYS);

/// Read-only handle over an ordered set of template lines.
#[derive(Copy, Clone, Debug)]
pub struct DefaultConfigDocument {
    lines: &'static [&'static str],
}

impl Default for DefaultConfigDocument {
    fn default() -> Self {
        DEFAULT_DOCUMENT
    }
}

impl DefaultConfigDocument {
    pub const fn new(lines: &'static [&'static str]) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.lines.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full file contents, each line terminated by `\n`.
    pub fn to_text(&self) -> String {
        let size = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut s = String::with_capacity(size);
        for line in self.lines {
            s.push_str(line);
            s.push('\n');
        }
        s
    }

    /// Writes the document verbatim.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for line in self.lines {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
        }
        w.flush()
    }
}

impl IntoIterator for DefaultConfigDocument {
    type Item = &'static str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'static, &'static str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter().copied()
    }
}
