use failure::Error;
use log::debug;
use primechunk::options::Opt;
use primechunk::session::Session;
use std::io::{self, BufWriter, Write};
use structopt::StructOpt;

// By having main return a result, we can have it exit non-zero and print an
// error when we experience an error by using the ? operator.
fn main() -> Result<(), Error> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut session = Session::new(opt.count);

    // By locking stdout ourselves & using writeln! instead of println!, we
    // avoid having to re-acquire the lock with each write. Then by using a
    // BufWriter instead of stdout directly, we batch many writes together
    // into a single write syscall.
    let stdout = io::stdout();
    let stdout = stdout.lock();
    let mut stdout = BufWriter::new(stdout);

    for i in 0..opt.chunks {
        let chunk = if i == 0 {
            session.start(opt.start)?
        } else {
            match session.extend()? {
                Some(chunk) => chunk,
                None => break,
            }
        };
        debug!(
            "chunk {}: {} primes, ending at {:?}",
            i + 1,
            chunk.len(),
            chunk.last()
        );
        for prime in chunk {
            writeln!(stdout, "{}", prime)?;
        }
    }
    Ok(())
}
