use std::io::{self, Write};

/// `MultiWriter` пишет один и тот же буфер в оба своих `writer`-а.
/// Второй `writer` получает данные даже если первый вернул ошибку.
pub struct MultiWriter<W1, W2> {
    w1: W1,
    w2: W2,
}

impl<W1: Write, W2: Write> MultiWriter<W1, W2> {
    pub fn new(w1: W1, w2: W2) -> Self {
        Self { w1, w2 }
    }

    /// Записывает весь буфер в оба `writer`-а и возвращает результат каждого по отдельности.
    pub fn write_both(&mut self, buf: &[u8]) -> (io::Result<()>, io::Result<()>) {
        let first = self.w1.write_all(buf);
        let second = self.w2.write_all(buf);
        (first, second)
    }

    pub fn flush_both(&mut self) -> (io::Result<()>, io::Result<()>) {
        let first = self.w1.flush();
        let second = self.w2.flush();
        (first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer, который всегда отказывает в записи.
    struct Rejecting;

    impl Write for Rejecting {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "rejected"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "rejected"))
        }
    }

    #[test]
    fn test_writes_same_bytes_to_both() {
        let mut multi = MultiWriter::new(Vec::new(), Vec::new());
        let (first, second) = multi.write_both(b"hello\n");
        assert!(first.is_ok() && second.is_ok(), "Both vectors accept writes");
        assert_eq!(multi.w1, b"hello\n");
        assert_eq!(multi.w2, b"hello\n");
    }

    #[test]
    fn test_second_written_when_first_fails() {
        let mut multi = MultiWriter::new(Rejecting, Vec::new());
        let (first, second) = multi.write_both(b"still here");
        assert!(first.is_err());
        assert!(second.is_ok());
        assert_eq!(multi.w2, b"still here");
    }

    #[test]
    fn test_flush_reports_each_writer() {
        let mut multi = MultiWriter::new(Vec::new(), Rejecting);
        let (first, second) = multi.flush_both();
        assert!(first.is_ok());
        assert_eq!(second.expect_err("Second writer rejects").kind(), io::ErrorKind::PermissionDenied);
    }
}
