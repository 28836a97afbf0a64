//! Reading and writing bipartite graphs as plain or gzipped text files.
//!
//! The first line holds the number of left and right vertices, every following
//! line one edge given by its two endpoints:
//! ```text
//! 3 3
//! 0 3
//! 0 4
//! 1 4
//! 2 5
//! ```
//! Empty lines are ignored.
use std::ffi::OsStr;
use std::io;
use std::io::{BufRead,BufReader,BufWriter,Write};
use std::fs::File;
use std::path::Path;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::graph::*;

pub trait WriteToFile {
    fn write_txt(&self, filename:&str) -> io::Result<()> {
        let file = File::create(filename)?;
        let buf = BufWriter::new(file);
        self.write_buf(Box::new(buf))
    }

    fn write_gzipped(&self, filename:&str) -> io::Result<()> {
        let file = File::create(filename)?;
        let gz = GzEncoder::new(file, Compression::default());
        let buf = BufWriter::new(gz);
        self.write_buf(Box::new(buf))
    }

    fn write_buf(&self, buf:Box<dyn Write>) -> io::Result<()>;
}

pub trait LoadFromFile {
    fn from_txt(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader_txt(filename)?;
        Self::from_buf(buf)
    }

    fn from_gzipped(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader_gzip(filename)?;
        Self::from_buf(buf)
    }

    /// Picks the decoder by file extension, `.txt` or `.gz`.
    fn from_file(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader(filename)?;
        Self::from_buf(buf)
    }

    fn from_buf(buf:Box<dyn BufRead>) -> io::Result<Self> where Self: Sized;
}

impl<G:BipartiteGraph> WriteToFile for G {
    fn write_buf(&self, mut buf:Box<dyn Write>) -> io::Result<()> {
        buf.write_all(format!("{} {}\n", self.num_left(), self.num_right()).as_bytes())?;
        for (u,v) in self.edges() {
            buf.write_all(format!("{u} {v}\n").as_bytes())?;
        }
        buf.flush()?;

        Ok(())
    }
}

impl<G:MutableBipartiteGraph> LoadFromFile for G {
    fn from_buf(buf:Box<dyn BufRead>) -> io::Result<Self> where Self: Sized {
        let mut lines = (1..).zip(buf.lines())
            .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

        let (left, right) = match lines.next() {
            Some((lineno, line)) => parse_pair(&line?, lineno)?,
            None => return Err(io::Error::new(io::ErrorKind::InvalidData,
                                              "Missing header with vertex counts"))
        };
        let (left, right) = (left as usize, right as usize);
        Self::check_size(left, right).map_err(|err| io::Error::new(io::ErrorKind::InvalidData,
                                         format!("Invalid header: {err}")))?;
        let mut graph = Self::new(left, right);

        for (lineno, line) in lines {
            let (u, v) = parse_pair(&line?, lineno)?;
            graph.add_edge(&u, &v).map_err(|err| io::Error::new(io::ErrorKind::InvalidData,
                                            format!("Invalid edge at input line {lineno}: {err}")))?;
        }

        Ok(graph)
    }
}

fn open_reader(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let extension = path.extension().and_then(OsStr::to_str);
    let reader:Box<dyn BufRead> = match extension {
        Some("txt") => {
            let file = File::open(path)?;
            Box::new(BufReader::new(file))
        }
        Some("gz") => {
            let file = File::open(path)?;
            let gz = GzDecoder::new(file);
            Box::new(BufReader::new(gz))
        }
        _ => {
            let error = std::io::Error::new(std::io::ErrorKind::InvalidInput,
                format!("Invalid file `{filename:?}`. The supported formats are `.txt.gz` and `.txt`."));
            return Err(error);
        }
    };
    Ok(reader)
}

fn open_reader_txt(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let file = File::open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_reader_gzip(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let file = File::open(path)?;
    let gz = GzDecoder::new(file);
    Ok(Box::new(BufReader::new(gz)))
}

fn parse_pair(line:&str, lineno:usize) -> io::Result<(Vertex, Vertex)> {
    let tokens:Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        let err = io::Error::new(io::ErrorKind::InvalidData,
                format!("Line {} does not contain two tokens", lineno));
        return Err(err)
    }
    Ok((parse_vertex(tokens[0], lineno)?, parse_vertex(tokens[1], lineno)?))
}

fn parse_vertex(s: &str, lineno:usize) -> io::Result<Vertex> {
    match s.parse::<Vertex>() {
        Ok(x) => Ok(x),
        Err(_) => Err(io::Error::new(io::ErrorKind::InvalidData,
                format!("Cannot parse vertex id {} at input line {}", s, lineno)))
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::listgraph::ListGraph;
    use crate::matrixgraph::MatrixGraph;
    use std::io::Cursor;

    fn reader(text:&'static str) -> Box<dyn BufRead> {
        Box::new(Cursor::new(text.as_bytes()))
    }

    fn temp_path(name:&str) -> String {
        let dir = std::env::temp_dir().join(format!("matroidmatch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn parse_graph() {
        let G = ListGraph::from_buf(reader("3 3\n0 3\n0 4\n\n5 1\n2 5\n")).unwrap();
        assert_eq!(G.num_left(), 3);
        assert_eq!(G.num_right(), 3);
        assert_eq!(G.edges().collect::<Vec<_>>(), vec![(0,3),(0,4),(1,5),(2,5)]);

        let M = MatrixGraph::from_buf(reader("3 3\n0 3\n0 4\n5 1\n2 5")).unwrap();
        assert_eq!(ListGraph::copy_of(&M), G);
    }

    #[test]
    fn malformed_input() {
        let err = ListGraph::from_buf(reader("")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err = ListGraph::from_buf(reader("2 2\n0 1 3\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err = ListGraph::from_buf(reader("2 2\n0 x\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        // Both endpoints on the left side
        let err = ListGraph::from_buf(reader("2 2\n0 1\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 2"), "{err}");

        let err = ListGraph::from_buf(reader("\n2 2\n\n0 x\n")).unwrap_err();
        assert!(err.to_string().contains("line 4"), "{err}");

        let err = ListGraph::from_buf(reader("2 2\n0 7\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn oversized_header() {
        let err = ListGraph::from_buf(reader("4294967295 4294967295\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err = MatrixGraph::from_buf(reader("4294967295 4294967295\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err = MatrixGraph::from_buf(reader("2147483648 2147483647\n")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn write_graph() {
        let G = ListGraph::from_edges(2, 3, vec![(0,2),(1,4),(1,2)]).unwrap();
        let txt = temp_path("graph.txt");
        let gz = temp_path("graph.txt.gz");
        G.write_txt(&txt).unwrap();
        G.write_gzipped(&gz).unwrap();

        assert_eq!(std::fs::read_to_string(&txt).unwrap(), "2 3\n0 2\n1 2\n1 4\n");

        let H1 = ListGraph::from_txt(&txt).unwrap();
        let H2 = ListGraph::from_gzipped(&gz).unwrap();
        let H3 = MatrixGraph::from_file(&gz).unwrap();
        assert_eq!(H1, G);
        assert_eq!(H2, G);
        assert_eq!(ListGraph::copy_of(&H3), G);
    }

    #[test]
    fn unknown_extension() {
        let err = ListGraph::from_file("graph.csv").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
