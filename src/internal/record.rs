// not Clone, a record has exactly one owner at a time
#[derive(Debug, PartialEq, Eq)]
pub struct Record {
    id: String,
    producer_id: usize,
    sequence: u64,
}

impl Record {
    pub fn new(producer_id: usize, sequence: u64) -> Record {
        Record {
            id: format!("user_{}_{}", producer_id, sequence),
            producer_id,
            sequence,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn producer_id(&self) -> usize {
        self.producer_id
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}
