fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = std::io::stdout().lock();

    koch_plotter::koch_controller(&args, &mut stdout)?;

    Ok(())
}
