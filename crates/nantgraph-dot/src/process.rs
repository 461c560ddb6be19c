//! Locating and driving the Graphviz `dot` executable.
//!
//! The renderer reads DOT text on stdin and writes an image file. Its stdin,
//! stdout and stderr are each serviced by their own thread so that a full
//! pipe buffer on one side can never stall the other; the whole exchange is
//! bounded by [`RenderConfig::timeout`].

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use which::which;

use nantgraph_error::{Error, Result};

use crate::config::RenderConfig;

const DOT_PROGRAM: &str = "dot";

/// Environment variables naming Windows program directories.
const PROGRAM_FILES_VARS: [&str; 2] = ["ProgramFiles", "ProgramFiles(x86)"];

/// stdin writer, stdout drain, stderr drain.
const PIPE_TASKS: usize = 3;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long pipe threads get to see end-of-file after the renderer is killed.
const PIPE_GRACE: Duration = Duration::from_millis(500);

fn dot_file_name() -> String {
    format!("{DOT_PROGRAM}{}", std::env::consts::EXE_SUFFIX)
}

/// Find the renderer executable.
///
/// Search order: the configured path (which must exist), `dot` on `PATH`,
/// then `graphviz*/bin/dot` under the Windows program directories, taking
/// the last installation by name.
pub fn locate_renderer(config: &RenderConfig) -> Result<PathBuf> {
    const OP: &str = "dot::locate_renderer";

    if let Some(path) = &config.dot_path {
        if path.is_file() {
            debug!(path = %path.display(), "using configured renderer");
            return Ok(path.clone());
        }
        return Err(Error::renderer_not_found(format!(
            "configured renderer '{}' does not exist",
            path.display()
        ))
        .with_operation(OP)
        .with_context("path", path.display().to_string()));
    }

    if let Ok(path) = which(DOT_PROGRAM) {
        debug!(path = %path.display(), "found renderer on PATH");
        return Ok(path);
    }

    let mut searched = vec!["PATH".to_string()];
    for var in PROGRAM_FILES_VARS {
        let Some(root) = std::env::var_os(var) else {
            continue;
        };
        let root = PathBuf::from(root);
        if let Some(path) = search_install_root(&root) {
            debug!(path = %path.display(), "found renderer in program directory");
            return Ok(path);
        }
        searched.push(root.display().to_string());
    }

    Err(Error::renderer_not_found(format!(
        "could not find '{}'; install Graphviz or pass its location explicitly",
        dot_file_name()
    ))
    .with_operation(OP)
    .with_context("searched", searched.join(", ")))
}

/// Newest-by-name `graphviz*/bin/dot` under `root`.
pub(crate) fn search_install_root(root: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(root).ok()?;
    let mut installs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .to_ascii_lowercase()
                .starts_with("graphviz")
        })
        .map(|entry| entry.path())
        .collect();
    installs.sort();

    let program = dot_file_name();
    installs
        .into_iter()
        .rev()
        .map(|dir| dir.join("bin").join(&program))
        .find(|candidate| candidate.is_file())
}

/// Run `renderer` over `dot_text` and return the image it wrote.
///
/// `Ok(None)` means the renderer ran but produced no output file, which is
/// what a malformed script usually causes. A renderer that cannot be started
/// or that outlives the timeout is an error.
pub fn run_renderer(
    renderer: &Path,
    dot_text: &str,
    config: &RenderConfig,
) -> Result<Option<Vec<u8>>> {
    const OP: &str = "dot::run_renderer";

    let workdir = tempfile::tempdir().map_err(|err| {
        Error::renderer_failed("failed to create a working directory")
            .with_operation(OP)
            .set_source(err)
    })?;
    let image_path = workdir
        .path()
        .join(format!("graph.{}", config.format.extension()));

    let mut output_arg = OsString::from("-o");
    output_arg.push(image_path.as_os_str());

    info!(
        renderer = %renderer.display(),
        format = %config.format,
        bytes = dot_text.len(),
        "running renderer"
    );

    let mut child = Command::new(renderer)
        .arg(format!("-T{}", config.format.as_str()))
        .arg(output_arg)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| spawn_error(renderer, err).with_operation(OP))?;

    let deadline = config.timeout.map(|timeout| Instant::now() + timeout);
    let (done_tx, done_rx) = mpsc::channel();

    let input = dot_text.as_bytes().to_vec();
    let writer = spawn_writer(child.stdin.take(), input, done_tx.clone());
    let stdout = spawn_drain(child.stdout.take(), done_tx.clone());
    let stderr = spawn_drain(child.stderr.take(), done_tx);

    let mut finished = 0;
    while finished < PIPE_TASKS {
        let signal = match deadline {
            Some(deadline) => {
                done_rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => done_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match signal {
            Ok(()) => finished += 1,
            Err(RecvTimeoutError::Timeout) => {
                let err = timed_out(&mut child, config.timeout);
                release_pipes(&done_rx, finished, writer, stdout, stderr);
                return Err(err.with_operation(OP));
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let status = match wait_for_exit(&mut child, deadline, config.timeout) {
        Ok(status) => status,
        Err(err) => {
            release_pipes(&done_rx, finished, writer, stdout, stderr);
            return Err(err.with_operation(OP));
        }
    };

    let write_result = join(writer)?;
    let stdout = join(stdout)?;
    let stderr = join(stderr)?;

    if let Err(err) = write_result {
        debug!(error = %err, "renderer stopped reading its input");
    }
    if !stdout.is_empty() {
        debug!(stdout = %String::from_utf8_lossy(&stdout).trim(), "renderer output");
    }
    if !status.success() {
        warn!(
            status = %status,
            stderr = %String::from_utf8_lossy(&stderr).trim(),
            "renderer exited with failure"
        );
    }

    match fs::read(&image_path) {
        Ok(bytes) => {
            debug!(bytes = bytes.len(), "renderer produced an image");
            Ok(Some(bytes))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("renderer produced no image");
            Ok(None)
        }
        Err(err) => Err(Error::from(err)
            .with_operation(OP)
            .with_context("path", image_path.display().to_string())),
    }
}

fn spawn_error(renderer: &Path, err: io::Error) -> Error {
    let path = renderer.display().to_string();
    let error = if err.kind() == io::ErrorKind::NotFound {
        Error::renderer_not_found(format!("renderer '{path}' could not be started"))
    } else {
        Error::renderer_failed(format!("failed to start renderer '{path}'"))
    };
    error.with_context("path", path).set_source(err)
}

fn spawn_writer<W>(pipe: Option<W>, input: Vec<u8>, done: Sender<()>) -> JoinHandle<io::Result<()>>
where
    W: Write + Send + 'static,
{
    thread::spawn(move || {
        // The pipe is closed when `pipe` drops at the end of this closure.
        let result = match pipe {
            Some(mut pipe) => pipe.write_all(&input).and_then(|()| pipe.flush()),
            None => Ok(()),
        };
        let _ = done.send(());
        result
    })
}

fn spawn_drain<R>(pipe: Option<R>, done: Sender<()>) -> JoinHandle<Vec<u8>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buffer);
        }
        let _ = done.send(());
        buffer
    })
}

fn wait_for_exit(
    child: &mut Child,
    deadline: Option<Instant>,
    timeout: Option<Duration>,
) -> Result<ExitStatus> {
    let Some(deadline) = deadline else {
        return child.wait().map_err(|err| {
            Error::renderer_failed("failed to wait for the renderer").set_source(err)
        });
    };

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if Instant::now() >= deadline => return Err(timed_out(child, timeout)),
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(err) => {
                return Err(
                    Error::renderer_failed("failed to wait for the renderer").set_source(err)
                );
            }
        }
    }
}

fn timed_out(child: &mut Child, timeout: Option<Duration>) -> Error {
    let _ = child.kill();
    let _ = child.wait();
    let seconds = timeout.unwrap_or_default().as_secs_f64();
    warn!(seconds, "renderer killed after timeout");
    Error::timeout(format!("renderer did not finish within {seconds:.1}s"))
}

/// Join the pipe threads of a killed renderer.
///
/// A thread still blocked after [`PIPE_GRACE`] is reading a pipe that some
/// process spawned by the renderer keeps open; it is detached.
fn release_pipes(
    done: &Receiver<()>,
    finished: usize,
    writer: JoinHandle<io::Result<()>>,
    stdout: JoinHandle<Vec<u8>>,
    stderr: JoinHandle<Vec<u8>>,
) {
    let deadline = Instant::now() + PIPE_GRACE;
    let mut finished = finished;
    while finished < PIPE_TASKS {
        match done.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(()) => finished += 1,
            Err(RecvTimeoutError::Disconnected) => finished = PIPE_TASKS,
            Err(RecvTimeoutError::Timeout) => break,
        }
    }

    if finished == PIPE_TASKS {
        let _ = writer.join();
        let _ = stdout.join();
        let _ = stderr.join();
        return;
    }
    let detached = [settle(writer), settle(stdout), settle(stderr)]
        .into_iter()
        .filter(|joined| !joined)
        .count();
    warn!(threads = detached, "renderer pipes still open after kill");
}

/// Join `handle` if its thread already finished; report whether it did.
fn settle<T>(handle: JoinHandle<T>) -> bool {
    if handle.is_finished() {
        let _ = handle.join();
        true
    } else {
        false
    }
}

fn join<T>(handle: JoinHandle<T>) -> Result<T> {
    handle
        .join()
        .map_err(|_| Error::unexpected("renderer pipe thread panicked"))
}
