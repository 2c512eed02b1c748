use pdf_text_extract::{ExtractionResult, cli, extract_pdf_text, logging};

fn main() {
    logging::init();

    let result = match cli::parse(std::env::args_os()) {
        Ok(path) => extract_pdf_text(&path),
        Err(e) => ExtractionResult::from(e),
    };

    println!("{}", result.to_json_line());
    std::process::exit(result.exit_code());
}
