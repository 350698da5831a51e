use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::index::inverted::Term;
use crate::index::posting::PostingList;
use crate::storage::segment::SegmentId;
use crate::core::error::Result;

/// Lazy loading segment reader
pub struct LazySegmentReader {
    pub segment_id: SegmentId,
    pub metadata: SegmentMetadata,
    pub loaded_parts: HashMap<IndexPart, Arc<Vec<u8>>>,
    pub file_path: PathBuf,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum IndexPart {
    Dictionary,
    Postings,
    DocStore,
    Positions,
}

impl LazySegmentReader {
    pub fn open(path: PathBuf) -> Result<Self> {
        // Read only metadata initially
        let metadata = Self::read_metadata(&path)?;

        Ok(LazySegmentReader {
            segment_id: metadata.id,
            metadata,
            loaded_parts: HashMap::new(),
            file_path: path,
        })
    }

    /// Load index part on demand
    pub fn load_part(&mut self, part: IndexPart) -> Result<Arc<Vec<u8>>> {
        if let Some(data) = self.loaded_parts.get(&part) {
            return Ok(Arc::clone(data));
        }

        // Load from disk
        let offset = self.get_part_offset(&part);
        let size = self.get_part_size(&part);

        let mut file = std::fs::File::open(&self.file_path)?;
        file.seek(std::io::SeekFrom::Start(offset))?;

        let mut data = vec![0u8; size];
        file.read_exact(&mut data)?;

        let data = Arc::new(data);
        self.loaded_parts.insert(part, Arc::clone(&data));

        Ok(data)
    }

    /// Unload parts to free memory
    pub fn unload_part(&mut self, part: IndexPart) {
        self.loaded_parts.remove(&part);
    }

    /// Search without loading full index
    pub fn search_lazy(&mut self, term: &Term) -> Result<Option<PostingList>> {
        // Load only dictionary
        let dict_data = self.load_part(IndexPart::Dictionary)?;

        // Binary search in dictionary
        if let Some(posting_offset) = self.find_in_dictionary(&dict_data, term) {
            // Load specific posting list
            let postings_data = self.load_part(IndexPart::Postings)?;
            let posting = self.read_posting_at(posting_offset, &postings_data)?;

            Ok(Some(posting))
        } else {
            Ok(None)
        }
    }

    fn read_metadata(path: &Path) -> Result<SegmentMetadata> {
        let mut file = std::fs::File::open(path)?;
        let mut header = vec![0u8; 256];
        file.read_exact(&mut header)?;

        Ok(bincode::deserialize(&header)?)
    }

    fn get_part_offset(&self, part: &IndexPart) -> u64 {
        match part {
            IndexPart::Dictionary => 256,
            IndexPart::Postings => 256 + self.metadata.dict_size,
            IndexPart::DocStore => 256 + self.metadata.dict_size + self.metadata.postings_size,
            IndexPart::Positions => 256 + self.metadata.dict_size +
                self.metadata.postings_size + self.metadata.docs_size,
        }
    }

    fn get_part_size(&self, part: &IndexPart) -> usize {
        match part {
            IndexPart::Dictionary => self.metadata.dict_size as usize,
            IndexPart::Postings => self.metadata.postings_size as usize,
            IndexPart::DocStore => self.metadata.docs_size as usize,
            IndexPart::Positions => self.metadata.positions_size as usize,
        }
    }

    fn find_in_dictionary(&self, dict_data: &[u8], term: &Term) -> Option<u64> {
        // Binary search implementation
        None // Placeholder
    }

    fn read_posting_at(&self, offset: u64, data: &[u8]) -> Result<PostingList> {
        // Deserialize posting list
        // Return empty PostingList for now
        Ok(PostingList::new(Vec::new())?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentMetadata {
    pub id: SegmentId,
    pub doc_count: u32,
    pub dict_size: u64,
    pub postings_size: u64,
    pub docs_size: u64,
    pub positions_size: u64,
}