//! SFTP staging connector
//!
//! Password-authenticated `ssh2` session to the staging host on port 22.
//! Host keys are not verified.

use std::fs::File;
use std::io;
use std::net::TcpStream;
use std::path::Path;

use ssh2::{ErrorCode, Session, Sftp};
use tracing::{debug, info};

use crate::domain::entities::ServerDescriptor;
use crate::domain::ports::{StagingConnector, StagingSession};
use crate::error::{PromstackError, PromstackResult};

pub const SSH_PORT: u16 = 22;

/// `SSH_FX_NO_SUCH_FILE` from the SFTP protocol
const SFTP_NO_SUCH_FILE: i32 = 2;

#[derive(Debug, Clone, Default)]
pub struct SftpConnector;

impl SftpConnector {
    pub fn new() -> Self {
        Self
    }
}

impl StagingConnector for SftpConnector {
    type Session = SftpSession;

    fn connect(&self, server: &ServerDescriptor) -> PromstackResult<SftpSession> {
        let addr = format!("{}:{}", server.ip, SSH_PORT);
        info!("Connecting to {}@{}", server.ssh_user, addr);

        let tcp = TcpStream::connect(&addr)
            .map_err(|e| PromstackError::transfer(format!("cannot connect to {}: {}", addr, e)))?;

        let mut session = Session::new().map_err(|e| ssh_error(&addr, e))?;
        session.set_tcp_stream(tcp);
        session.handshake().map_err(|e| ssh_error(&addr, e))?;

        session
            .userauth_password(&server.ssh_user, &server.ssh_password)
            .map_err(|e| ssh_error(&addr, e))?;
        if !session.authenticated() {
            return Err(PromstackError::transfer(format!(
                "SSH authentication failed for {}@{}",
                server.ssh_user, addr
            )));
        }

        let sftp = session.sftp().map_err(|e| ssh_error(&addr, e))?;
        debug!("SFTP channel open on {}", addr);

        Ok(SftpSession {
            session,
            sftp,
            host: addr,
        })
    }
}

pub struct SftpSession {
    session: Session,
    sftp: Sftp,
    host: String,
}

impl StagingSession for SftpSession {
    fn exists(&mut self, remote_path: &str) -> PromstackResult<bool> {
        match self.sftp.stat(Path::new(remote_path)) {
            Ok(_) => Ok(true),
            Err(e) if matches!(e.code(), ErrorCode::SFTP(SFTP_NO_SUCH_FILE)) => Ok(false),
            Err(e) => Err(ssh_error(&self.host, e)),
        }
    }

    fn create_dir(&mut self, remote_path: &str) -> PromstackResult<()> {
        debug!("mkdir {} on {}", remote_path, self.host);
        self.sftp
            .mkdir(Path::new(remote_path), 0o755)
            .map_err(|e| ssh_error(&self.host, e))
    }

    fn upload(&mut self, local_path: &Path, remote_path: &str) -> PromstackResult<()> {
        let mut local = File::open(local_path).map_err(|e| {
            PromstackError::transfer(format!("cannot open {}: {}", local_path.display(), e))
        })?;
        let mut remote = self
            .sftp
            .create(Path::new(remote_path))
            .map_err(|e| ssh_error(&self.host, e))?;
        let bytes = io::copy(&mut local, &mut remote).map_err(|e| {
            PromstackError::transfer(format!("copy to {}:{} failed: {}", self.host, remote_path, e))
        })?;
        debug!("uploaded {} bytes to {}:{}", bytes, self.host, remote_path);
        Ok(())
    }

    fn close(self) -> PromstackResult<()> {
        let SftpSession {
            session,
            sftp,
            host,
        } = self;
        drop(sftp);
        session
            .disconnect(None, "transfer complete", None)
            .map_err(|e| ssh_error(&host, e))?;
        debug!("SSH session to {} closed", host);
        Ok(())
    }
}

fn ssh_error(host: &str, err: ssh2::Error) -> PromstackError {
    PromstackError::transfer(format!("{}: {}", host, err))
}
