use std::io::{self, Write};

use crate::huffman::Analysis;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub draw_tree: bool,
    pub summary: bool,
}

pub struct ReportWriter<'a, T> {
    writer: &'a mut T,
    options: ReportOptions,
}

impl<'a, T: Write> ReportWriter<'a, T> {
    pub fn new(writer: &'a mut T, options: ReportOptions) -> ReportWriter<'a, T> {
        ReportWriter { writer, options }
    }

    pub fn write(&mut self, analysis: &Analysis) -> io::Result<()> {
        self.write_tree_dump(analysis)?;
        if self.options.draw_tree {
            self.write_tree_drawing(analysis)?;
        }
        self.write_codes(analysis)?;
        if self.options.summary {
            self.write_summary(analysis)?;
        }
        self.writer.flush()
    }

    fn write_tree_dump(&mut self, analysis: &Analysis) -> io::Result<()> {
        if let Some(tree) = analysis.tree() {
            self.writer.write_all(&tree.preorder_symbols())?;
        }
        self.writer.write_all(b"\n")
    }

    fn write_tree_drawing(&mut self, analysis: &Analysis) -> io::Result<()> {
        match analysis.tree() {
            Some(tree) => write!(self.writer, "{}", tree),
            None => Ok(()),
        }
    }

    fn write_codes(&mut self, analysis: &Analysis) -> io::Result<()> {
        for entry in analysis.code_book().iter() {
            // the symbol is written as the raw byte, like the tree dump
            self.writer.write_all(&[entry.symbol(), b' '])?;
            writeln!(self.writer, "{}", entry.code())?;
        }
        Ok(())
    }

    fn write_summary(&mut self, analysis: &Analysis) -> io::Result<()> {
        let code_book = analysis.code_book();
        writeln!(self.writer, "encoded bits: {}", code_book.encoded_bit_count())?;
        writeln!(
            self.writer,
            "fixed-width bits: {}",
            code_book.fixed_width_bit_count()
        )
    }
}
