// Test modules for companies-house-fixtures crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.
