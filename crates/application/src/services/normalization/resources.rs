use std::collections::{HashMap, HashSet};

/// Indonesian base stopword list.
pub const INDONESIAN_STOPWORDS: &[&str] = &[
    "ada", "adalah", "adanya", "adapun", "agak", "agaknya", "agar", "akan", "akankah", "akhir",
    "akhiri", "akhirnya", "aku", "akulah", "amat", "amatlah", "anda", "andalah", "antar",
    "antara", "antaranya", "apa", "apaan", "apabila", "apakah", "apalagi", "apatah", "artinya",
    "asal", "asalkan", "atas", "atau", "ataukah", "ataupun", "awal", "awalnya", "bagai",
    "bagaikan", "bagaimana", "bagaimanakah", "bagaimanapun", "bagi", "bagian", "bahkan",
    "bahwa", "bahwasanya", "baik", "bakal", "bakalan", "balik", "banyak", "bapak", "baru",
    "bawah", "beberapa", "begini", "beginian", "beginilah", "begitu", "begitukah",
    "begitulah", "begitupun", "bekerja", "belakang", "belakangan", "belum", "belumlah",
    "benar", "benarkah", "benarlah", "berada", "berakhir", "berapa", "berapakah", "berbagai",
    "berikut", "berikutnya", "berjumlah", "berkali-kali", "berkata", "berkehendak",
    "berkeinginan", "berlalu", "bermacam", "bersama", "bersiap", "bertanya", "berturut",
    "bertutur", "berupa", "besar", "betul", "biasa", "biasanya", "bila", "bilakah", "bisa",
    "bisakah", "boleh", "bolehkah", "buat", "bukan", "bukankah", "bukanlah", "bukannya",
    "bulan", "bung", "cara", "caranya", "cukup", "cukupkah", "cukuplah", "cuma", "dahulu",
    "dalam", "dan", "dapat", "dari", "daripada", "datang", "dekat", "demi", "demikian",
    "demikianlah", "dengan", "depan", "di", "dia", "diakhiri", "diakhirinya", "dialah",
    "diantara", "diantaranya", "diberi", "diberikan", "diberikannya", "dibuat", "dibuatnya",
    "didapat", "didatangkan", "digunakan", "diibaratkan", "diingat", "diingatkan", "diinginkan",
    "dijawab", "dijelaskan", "dikarenakan", "dikatakan", "dikerjakan", "diketahui",
    "dilakukan", "dilalui", "dilihat", "dimaksud", "dimana", "dimulai", "dimungkinkan", "dini",
    "dipastikan", "diperbuat", "diperlukan", "dipersoalkan", "dipunyai", "diri", "dirinya",
    "disebut", "disebutkan", "disini", "ditambahkan", "ditanya", "ditanyakan", "ditegaskan",
    "ditujukan", "ditunjuk", "ditunjukkan", "dong", "dua", "dulu", "empat", "enggak", "enggaknya",
    "entah", "guna", "gunakan", "hal", "hampir", "hanya", "hanyalah", "hari", "harus",
    "haruslah", "harusnya", "hendak", "hendaklah", "hingga", "ia", "ialah", "ibarat", "ibu",
    "ikut", "ingat", "ingin", "inginkah", "ini", "inikah", "inilah", "itu", "itukah", "itulah",
    "jadi", "jadilah", "jadinya", "jangan", "jangankan", "janganlah", "jauh", "jawab",
    "jelas", "jelaslah", "jika", "jikalau", "juga", "jumlah", "justru", "kala", "kalau",
    "kalaulah", "kalaupun", "kalian", "kami", "kamilah", "kamu", "kamulah", "kan", "kapan",
    "kapankah", "kapanpun", "karena", "karenanya", "kasus", "kata", "katakan", "katanya", "ke",
    "keadaan", "kebetulan", "kecil", "kedua", "keduanya", "keinginan", "kelamaan", "kelihatan",
    "keluar", "kembali", "kemudian", "kemungkinan", "kenapa", "kepada", "kepadanya", "kesamaan",
    "keseluruhan", "ketika", "khususnya", "kini", "kinilah", "kira", "kita", "kitalah", "kok",
    "kurang", "lagi", "lagian", "lah", "lain", "lainnya", "lalu", "lama", "lamanya", "lanjut",
    "lebih", "lewat", "lima", "luar", "macam", "maka", "makanya", "makin", "malah", "malahan",
    "mampu", "mana", "manakala", "manalagi", "masa", "masalah", "masih", "masing",
    "masing-masing", "mau", "maupun", "melainkan", "melakukan", "melalui", "melihat",
    "memang", "memastikan", "memberi", "memberikan", "membuat", "memerlukan", "meminta",
    "memperlihatkan", "mempunyai", "menambahkan", "menanti", "mendapat", "mendapatkan",
    "mengatakan", "mengenai", "mengetahui", "menggunakan", "menjadi", "menjawab",
    "menjelaskan", "menuju", "menunjuk", "menurut", "merasa", "mereka", "merekalah", "merupakan",
    "meski", "meskipun", "mungkin", "mungkinkah", "nah", "naik", "namun", "nanti", "nantinya",
    "nyaris", "oleh", "olehnya", "pada", "padahal", "padanya", "paling", "panjang", "pantas",
    "para", "pasti", "pastilah", "penting", "per", "percuma", "perlu", "perlukah", "perlunya",
    "pernah", "persoalan", "pertama", "pihak", "pukul", "pula", "pun", "punya", "rasa",
    "rupanya", "saat", "saja", "sajalah", "saling", "sama", "sambil", "sampai", "sana",
    "sangat", "sangatlah", "satu", "saya", "sayalah", "se", "sebab", "sebabnya", "sebagai",
    "sebagaimana", "sebagian", "sebaik", "sebaiknya", "sebanyak", "sebegini", "sebegitu",
    "sebelum", "sebelumnya", "sebenarnya", "seberapa", "sebesar", "sebetulnya", "sebisanya",
    "sebuah", "secara", "sedang", "sedangkan", "sedikit", "segala", "segera", "sehingga",
    "sejak", "sejauh", "sekali", "sekalian", "sekarang", "sekitar", "selagi", "selain",
    "selaku", "selalu", "selama", "seluruh", "seluruhnya", "semakin", "semua", "semuanya",
    "sendiri", "sendirinya", "seorang", "seperti", "sepertinya", "serta", "sesuatu",
    "sesudah", "setelah", "setiap", "siapa", "siapakah", "siapapun", "sini", "sinilah",
    "suatu", "sudah", "sudahlah", "supaya", "tadi", "tadinya", "tahu", "tak", "tambah",
    "tampak", "tanpa", "tanya", "tapi", "tentang", "tentu", "terhadap", "terjadi", "terlalu",
    "termasuk", "ternyata", "tersebut", "tertentu", "tetap", "tetapi", "tiap", "tidak",
    "tidakkah", "tidaklah", "tiga", "toh", "tunjuk", "turut", "untuk", "usah", "waduh",
    "wah", "wahai", "waktu", "walau", "walaupun", "wong", "yaitu", "yakni", "yang",
];

/// Informal fillers common in scraped Indonesian web copy.
pub const INFORMAL_STOPWORDS: &[&str] = &[
    "yg", "dg", "rt", "dgn", "ny", "d", "klo", "kalo", "amp", "biar", "bikin", "bilang", "gak",
    "ga", "krn", "nya", "nih", "sih", "si", "tau", "tdk", "tuh", "utk", "ya", "jd", "jgn", "sdh",
    "aja", "n", "t", "nyg", "hehe", "pen", "u", "nan", "loh", "&amp", "yah", "gtgt", "ltlt",
];

/// Read-only lookup tables shared by every document of a sweep.
#[derive(Debug, Clone, Default)]
pub struct NormalizationResources {
    dictionary: HashMap<String, String>,
    stopwords: HashSet<String>,
}

impl NormalizationResources {
    pub fn new(dictionary: HashMap<String, String>, stopwords: HashSet<String>) -> Self {
        Self {
            dictionary,
            stopwords,
        }
    }

    /// Builds the stopword set as the union of `base`, the informal filler
    /// list and `supplementary`. Later dictionary pairs overwrite earlier
    /// ones with the same key.
    pub fn build<D, B, S>(dictionary_pairs: D, base: B, supplementary: S) -> Self
    where
        D: IntoIterator<Item = (String, String)>,
        B: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        let dictionary = dictionary_pairs.into_iter().collect();
        let stopwords = base
            .into_iter()
            .chain(INFORMAL_STOPWORDS.iter().map(|w| w.to_string()))
            .chain(supplementary)
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            dictionary,
            stopwords,
        }
    }

    pub fn default_base_stopwords() -> impl Iterator<Item = String> {
        INDONESIAN_STOPWORDS.iter().map(|w| w.to_string())
    }

    pub fn canonical<'a>(&'a self, token: &'a str) -> &'a str {
        self.dictionary
            .get(token)
            .map(String::as_str)
            .unwrap_or(token)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}
