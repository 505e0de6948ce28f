const HELP: &str = "\
Introduction to code-words:
  code-words randomly generates a sequence of words chosen from a reference
  file. Add or remove words and categories as you like, or write your own
  reference file. Categories can be reused any number of times, in any
  order. The default reference file (codex.txt) is used unless -f or the
  CODEWORDS_FILE environment variable names another.

SYNTAX
  code-words [-h] [-s [seed]] [-f [filename]] [-lc | -lv] [-g # [# ...]] [--json]

ARGUMENTS
  -h                 Displays this help page.
  -s <seed>          Use a user-defined seed for the random number generator.
  -f <filename>      Reference <filename> instead of codex.txt for word lists.
  -lc                List categories and indices from the reference file.
  -lv                Verbosely list word categories from the reference file.
  -g {c1 c2 ... cN}  Generate a code word from the listed category indices.
  --json             Print listings and generated words as JSON.

REFERENCE FILE
  Lines alternate a category label and a comma-separated list of words:
    CATEGORY(1)
    ITEM(1),ITEM(2),...,ITEM(N)
    CATEGORY(2)
    ITEM(1),ITEM(2),...,ITEM(N)

EXAMPLE
  code-words -g 0 7 2 8
    Outputs the sequence of words \"w1 w2 w3 w4\", where w1 is chosen from
    category 0, w2 from category 7, w3 from category 2 and w4 from
    category 8 of codex.txt.

  code-words -f foo.txt -lc
    Lists the categories contained in foo.txt.

  code-words -s abc123^!@#QWERTY -f foo.txt -g 3 2 5
    Outputs the sequence of words \"w1 w2 w3\" from categories 3, 2 and 5
    of foo.txt using the seed \"abc123^!@#QWERTY\", always yielding the same
    words. Share the seed to share the sequence. Seeds should be at least
    16 characters long.

ENVIRONMENT
  CODEWORDS_FILE     Reference file used when -f is not given.
  CODEWORDS_DEBUG    Print debug diagnostics on stderr.
";

pub fn run() {
    print!("{}", HELP);
}
