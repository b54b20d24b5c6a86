use huffman_tree_builder::huffman::{
    code::CodeBook, frequency::FrequencyTable, tree::HuffmanTreeBuilder,
};
use huffman_tree_builder::Result;

fn main() -> Result<()> {
    let text = b"abracadabra alakazam";

    let frequencies = FrequencyTable::from_iter(text.iter());
    let tree = HuffmanTreeBuilder::from(&frequencies).build()?;
    println!("huffman tree\n{}", tree);
    println!(
        "pre-order dump\n{}",
        String::from_utf8_lossy(&tree.preorder_symbols())
    );

    let code_book = CodeBook::from(&tree);
    println!("codes");
    for entry in code_book.iter() {
        println!(
            "{:?} f:{} {}",
            entry.symbol() as char,
            entry.frequency(),
            entry.code()
        );
    }
    println!(
        "{} bits instead of {} bits",
        code_book.encoded_bit_count(),
        code_book.fixed_width_bit_count()
    );
    Ok(())
}
